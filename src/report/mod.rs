//! Report module - rendering intermediate and summary tables

pub mod tables;

pub use tables::*;
