//! Guarded file access
//!
//! Read, write, and listing operations on paths the guard has approved.

pub mod operations;
pub mod results;

pub use operations::{list_directory, read_file, write_file};
pub use results::FileContent;
