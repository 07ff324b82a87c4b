//! Terminal output formatting
//!
//! Display utilities for the line-based modes and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, write_check_report};
