pub mod json;
pub mod value;

pub use json::from_json_str;
pub use value::{Record, Scalar, Value};
