//! Failure taxonomies for the calculator and the resolver boundary.
//!
//! Every variant carries the offending value so errors can be surfaced
//! verbatim. All failures are static properties of the input: nothing is
//! retried, and no operation mutates state before failing.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Validation failures for address and prefix input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// The address text is not a dotted quad of four octets in 0-255.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),
    /// The prefix is not an integer in the accepted range.
    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),
}

/// Failures from the external name-resolution collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Forward lookup returned no IPv4 answer for the name.
    #[error("no address found for hostname: {0}")]
    NameNotFound(String),
    /// Reverse lookup returned no hostname for the address.
    #[error("no hostname found for address: {0}")]
    AddressNotFound(Ipv4Addr),
    /// Any other resolution failure (resolver unreachable, bad response).
    #[error("resolution failed: {0}")]
    Failed(String),
}
