//! Core helpers behind the nimbus CLI: input tokenizing, size conversion,
//! record filtering, mime guessing, path sizing and the command history.

pub mod error;
pub mod filter;
pub mod history;
pub mod mime;
pub mod path;
pub mod size;
pub mod tokenize;

pub use error::{Error, Result};
pub use filter::{FilterError, filter_dicts_by_dict, remove_from_items};
pub use history::{History, HistoryEntry};
pub use mime::{DEFAULT_CONTENT_TYPE, guess_mime_type};
pub use path::{expand_tilde, get_path_size, resolve_workspace_path};
pub use size::{
    SizeError, SizeUnit, SizeValue, UnitFamily, format_size, format_size_str, to_bytes,
    to_bytes_str,
};
pub use tokenize::split_input;
