//! Output formatting for the network report.
//!
//! This module handles rendering the derived report:
//! - [`json`] - single JSON document output
//! - [`terminal`] - aligned text output with colored section headers

mod json;
mod terminal;

pub use json::{print_report_json, to_json};
pub use terminal::{format_field, print_report};
