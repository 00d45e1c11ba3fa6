pub mod du;
pub mod history;
pub mod history_clean;
pub mod mime;
pub mod show;
pub mod size;
pub mod to_bytes;
