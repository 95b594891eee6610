//! Report building for a parsed network.
//!
//! Derives every property the CLI prints into one plain data structure, so
//! rendering is a formatting concern only.

use crate::error::CidrError;
use crate::models::{AddressClass, Ipv4Net, Subnets};
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

/// The full property set derived from one (address, prefix) input.
///
/// Built once, never mutated. The legacy class is classified from the
/// address *as typed by the caller*, not from the normalized network base;
/// a host address inside the subnet therefore classifies by its own first
/// octet even though all subnet math proceeds from the derived network.
/// This mirrors classful addressing being independent of the CIDR exercise.
#[derive(Serialize, Debug, Clone)]
pub struct NetworkReport {
    /// The address as typed, before host bits were cleared.
    pub input: Ipv4Addr,
    /// The normalized network.
    pub network: Ipv4Net,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub num_addresses: u64,
    pub usable_hosts: u64,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    /// Legacy class of `input` (not of `network`).
    pub class: AddressClass,
    /// The finer prefix for the subdivision listing, validated at build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<u8>,
    /// Materialized subdivision, only populated via [`Self::materialize_subnets`]
    /// for output formats that cannot stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Ipv4Net>>,
}

impl NetworkReport {
    /// Parse and validate the input, then derive every report field.
    ///
    /// All-or-nothing: any validation failure (bad address text, prefix or
    /// divide prefix out of range) is returned before anything is derived.
    pub fn build(
        addr_text: &str,
        prefix: u8,
        divide: Option<u8>,
    ) -> Result<NetworkReport, CidrError> {
        log::info!("#Start NetworkReport::build({addr_text}/{prefix}, divide={divide:?})");

        let input: Ipv4Addr = addr_text
            .trim()
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr_text.trim().to_string()))?;
        let network = Ipv4Net::new(input, prefix)?;
        if let Some(d) = divide {
            // Validate now so rendering cannot fail later.
            let _ = network.subnets(d)?;
        }

        if network.addr() != input {
            log::warn!(
                "host bits in {input} cleared, network address is {base}",
                base = network.addr()
            );
        }
        if prefix >= 31 {
            log::warn!("/{prefix} is a degenerate range, host rules follow RFC 3021");
        }

        let (first_host, last_host) = network.host_range();
        let report = NetworkReport {
            input,
            network,
            netmask: network.netmask(),
            wildcard: network.hostmask(),
            broadcast: network.broadcast(),
            num_addresses: network.num_addresses(),
            usable_hosts: network.usable_hosts(),
            first_host,
            last_host,
            class: AddressClass::of(input),
            divide,
            subnets: None,
        };
        log::debug!("derived report: {report:?}");
        Ok(report)
    }

    /// Restart the lazy subdivision listing, if a divide prefix was given.
    ///
    /// The divide prefix was validated in [`Self::build`], so this is total.
    pub fn subdivision(&self) -> Option<Subnets> {
        self.divide.and_then(|d| self.network.subnets(d).ok())
    }

    /// Materialize the subdivision into the `subnets` field.
    ///
    /// Only the JSON path needs this; the text renderer streams
    /// [`Self::subdivision`] instead.
    pub fn materialize_subnets(mut self) -> NetworkReport {
        self.subnets = self.subdivision().map(|s| s.collect_vec());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_scenario() {
        let report = NetworkReport::build("192.168.10.5", 28, None).expect("valid input");

        assert_eq!(report.input, Ipv4Addr::new(192, 168, 10, 5));
        assert_eq!(report.network.addr(), Ipv4Addr::new(192, 168, 10, 0));
        assert_eq!(report.broadcast, Ipv4Addr::new(192, 168, 10, 15));
        assert_eq!(report.netmask, Ipv4Addr::new(255, 255, 255, 240));
        assert_eq!(report.wildcard, Ipv4Addr::new(0, 0, 0, 15));
        assert_eq!(report.num_addresses, 16);
        assert_eq!(report.usable_hosts, 14);
        assert_eq!(report.first_host, Ipv4Addr::new(192, 168, 10, 1));
        assert_eq!(report.last_host, Ipv4Addr::new(192, 168, 10, 14));
        assert_eq!(report.class, AddressClass::C);
        assert!(report.subdivision().is_none());
    }

    #[test]
    fn test_build_classifies_typed_address_not_base() {
        // 127.x normalized down to a /8 base would still be 127.0.0.0, but
        // take a wider case: class comes from the input octet even when the
        // base has a different value pattern.
        let report = NetworkReport::build("127.0.0.1", 8, None).expect("valid input");
        assert_eq!(report.class, AddressClass::Unknown);
        assert_eq!(report.network.addr(), Ipv4Addr::new(127, 0, 0, 0));
    }

    #[test]
    fn test_build_with_divide() {
        let report = NetworkReport::build("192.168.10.0", 24, Some(30)).expect("valid input");
        let subnets: Vec<Ipv4Net> = report.subdivision().expect("divide given").collect();

        assert_eq!(subnets.len(), 64);
        assert_eq!(subnets[0].to_string(), "192.168.10.0/30");
        assert_eq!(subnets[63].to_string(), "192.168.10.252/30");

        // Restartable: a second call yields the identical sequence.
        let again: Vec<Ipv4Net> = report.subdivision().expect("divide given").collect();
        assert_eq!(subnets, again);
    }

    #[test]
    fn test_build_rejects_bad_input() {
        assert_eq!(
            NetworkReport::build("192.168.10.256", 24, None).unwrap_err(),
            CidrError::InvalidAddress("192.168.10.256".to_string())
        );
        assert_eq!(
            NetworkReport::build("192.168.10.0", 33, None).unwrap_err(),
            CidrError::InvalidPrefix("33 (must be 0-32)".to_string())
        );
        // Divide coarser than the network fails at build, not at render.
        assert_eq!(
            NetworkReport::build("192.168.10.0", 24, Some(16)).unwrap_err(),
            CidrError::InvalidPrefix("16 (does not subdivide /24)".to_string())
        );
    }

    #[test]
    fn test_materialize_subnets() {
        let report = NetworkReport::build("10.0.0.0", 30, Some(32))
            .expect("valid input")
            .materialize_subnets();
        let subnets = report.subnets.expect("materialized");
        assert_eq!(subnets.len(), 4);

        let bare = NetworkReport::build("10.0.0.0", 30, None)
            .expect("valid input")
            .materialize_subnets();
        assert!(bare.subnets.is_none());
    }
}
