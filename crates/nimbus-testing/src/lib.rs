//! Testing infrastructure for nimbus integration tests.
//!
//! - `TestWorld`: isolated workspace directory plus CLI execution
//! - `assertions`: checks on history files and rendered output
//! - `fixtures`: sample command results as JSON

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
