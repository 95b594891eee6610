// cargo watch -x 'fmt' -x 'run -- 192.168.10.0/24 30'

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod resolver;

pub use error::{CidrError, ResolveError};
pub use models::{AddressClass, Ipv4Net, Subnets};
pub use processing::NetworkReport;

/// Build the full property report for an address and prefix.
///
/// Thin wrapper over [`NetworkReport::build`] for `main` and the
/// integration tests.
pub fn report(
    addr_text: &str,
    prefix: u8,
    divide: Option<u8>,
) -> Result<NetworkReport, CidrError> {
    NetworkReport::build(addr_text, prefix, divide)
}
