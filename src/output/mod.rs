//! Output formatting for subnet reports.
//!
//! This module handles rendering the computed report:
//! - [`terminal`](self::terminal) - labeled lines and the subnet table
//! - [`json`](self::json) - serialized report

mod json;
mod terminal;

pub use json::print_json;
pub use terminal::{format_field, print_report};
