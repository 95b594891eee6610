//! Report derivation logic.
//!
//! This module turns validated input into the plain data structure the
//! output layer renders:
//! - [`report`] - building the full property set for one network

mod report;

// Re-export public types
pub use report::NetworkReport;
