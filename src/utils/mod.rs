//! Utility module - terminal output helpers

pub mod styling;

pub use styling::*;
