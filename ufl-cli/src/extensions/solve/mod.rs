//! Contains functionality used by solve command.

pub mod config;
pub mod formats;
pub mod interruption;
