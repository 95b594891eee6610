//! Domain models for the subnet calculator.
//!
//! This module contains the core value types all computation runs on:
//! - [`Ipv4Net`] - an IPv4 network in CIDR notation, with mask/range math
//! - [`Subnets`] - lazy iterator over a network's subdivision
//! - [`AddressClass`] - legacy classful-addressing classification

mod class;
mod ipv4;

// Re-export public types
pub use class::AddressClass;
pub use ipv4::{
    broadcast_addr, host_mask, network_addr, parse_prefix, prefix_mask, Ipv4Net, Subnets,
    MAX_PREFIX,
};
