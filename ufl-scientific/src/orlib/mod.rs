//! Contains functionality to read OR-Library uncapacitated facility location problems.

mod reader;
pub use self::reader::OrlibProblem;
