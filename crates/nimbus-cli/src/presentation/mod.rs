//! Rendering of command results on the terminal.

pub mod console;
pub mod error;
pub mod pager;
pub mod prompt;
pub mod style;

pub use console::{Console, INDENT_TAB, dict2file, list2file};
pub use error::RenderError;
pub use pager::{NoPager, Pager, StdinPager, page_hold};
pub use prompt::{Spinner, ask_user};
pub use style::Style;
