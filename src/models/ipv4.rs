//! IPv4 network values and CIDR bit math.
//!
//! Provides the [`Ipv4Net`] struct for representing an IPv4 network in CIDR
//! notation, along with the mask/address derivations every report field is
//! computed from.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(prefix: u8) -> Result<u32, CidrError> {
    if prefix > MAX_PREFIX {
        Err(CidrError::InvalidPrefix(format!("{prefix} (must be 0-32)")))
    } else {
        Ok(mask_bits(prefix))
    }
}

/// Convert a CIDR prefix length to the wildcard (host) mask as u32.
pub fn host_mask(prefix: u8) -> Result<u32, CidrError> {
    Ok(!prefix_mask(prefix)?)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, CidrError> {
    let bits = u32::from(addr) & prefix_mask(prefix)?;
    Ok(Ipv4Addr::from(bits))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = prefix_mask(prefix)?;
    let bits = (u32::from(addr) & mask) | !mask;
    Ok(Ipv4Addr::from(bits))
}

/// Parse a prefix-length token, accepting only integers in [0,32].
///
/// The raw token is kept in the error, so out-of-range text such as `"256"`
/// or `"abc"` is still named in the message.
pub fn parse_prefix(text: &str) -> Result<u8, CidrError> {
    let text = text.trim();
    match text.parse::<u8>() {
        Ok(p) if p <= MAX_PREFIX => Ok(p),
        _ => Err(CidrError::InvalidPrefix(format!("{text} (must be 0-32)"))),
    }
}

// prefix is validated by every caller
fn mask_bits(prefix: u8) -> u32 {
    let right_len = u32::from(MAX_PREFIX - prefix);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// An IPv4 network: base address plus prefix length.
///
/// The base always has its host bits cleared; constructors normalize a host
/// address down to the enclosing network. Values are immutable once built.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Net {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Net {
    /// Create a network from an address and prefix length.
    ///
    /// Host bits in `addr` are cleared, so `192.168.10.5/28` and
    /// `192.168.10.0/28` construct the same network.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Net, CidrError> {
        if prefix > MAX_PREFIX {
            return Err(CidrError::InvalidPrefix(format!("{prefix} (must be 0-32)")));
        }
        let base = u32::from(addr) & mask_bits(prefix);
        Ok(Ipv4Net {
            addr: Ipv4Addr::from(base),
            prefix,
        })
    }

    /// Create a network from a CIDR string (e.g., "10.0.0.0/24").
    pub fn from_cidr(cidr: &str) -> Result<Ipv4Net, CidrError> {
        let cidr = cidr.trim();
        let (addr_text, prefix_text) = cidr
            .split_once('/')
            .ok_or_else(|| CidrError::InvalidAddress(format!("{cidr} (expected a.b.c.d/prefix)")))?;
        let addr: Ipv4Addr = addr_text
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr_text.to_string()))?;
        Ipv4Net::new(addr, parse_prefix(prefix_text)?)
    }

    /// The network (base) address, host bits all zero.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The subnet mask: top `prefix` bits set.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    /// The wildcard mask: bitwise complement of the netmask.
    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!mask_bits(self.prefix))
    }

    /// The broadcast address: base with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.prefix))
    }

    /// Total number of addresses in the network, `2^(32-prefix)`.
    pub fn num_addresses(&self) -> u64 {
        1u64 << u32::from(MAX_PREFIX - self.prefix)
    }

    /// Number of usable host addresses.
    ///
    /// For /31 both addresses count as usable (RFC 3021 point-to-point
    /// links have no network or broadcast address); a /32 is one usable
    /// host. Everything wider loses the network and broadcast addresses.
    pub fn usable_hosts(&self) -> u64 {
        match self.prefix {
            32 => 1,
            31 => 2,
            _ => self.num_addresses() - 2,
        }
    }

    /// First and last usable host address, as a closed-form rule per prefix.
    ///
    /// /31 spans both addresses, /32 collapses to the single address, and
    /// anything wider excludes the network and broadcast addresses. Total
    /// over every valid network; there is no degenerate empty case.
    pub fn host_range(&self) -> (Ipv4Addr, Ipv4Addr) {
        match self.prefix {
            32 => (self.addr, self.addr),
            31 => (self.addr, self.broadcast()),
            _ => (
                Ipv4Addr::from(u32::from(self.addr) + 1),
                Ipv4Addr::from(u32::from(self.broadcast()) - 1),
            ),
        }
    }

    /// Check if an IP address falls inside this network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.addr && ip <= self.broadcast()
    }

    /// Split this network into every contained subnet of `new_prefix`.
    ///
    /// Yields `2^(new_prefix - prefix)` networks in strictly ascending
    /// address order. The iterator is lazy and `Clone`; calling `subnets`
    /// again restarts an identical sequence. `new_prefix` must lie between
    /// this network's prefix and 32.
    pub fn subnets(&self, new_prefix: u8) -> Result<Subnets, CidrError> {
        if new_prefix > MAX_PREFIX {
            return Err(CidrError::InvalidPrefix(format!(
                "{new_prefix} (must be 0-32)"
            )));
        }
        if new_prefix < self.prefix {
            return Err(CidrError::InvalidPrefix(format!(
                "{new_prefix} (does not subdivide /{})",
                self.prefix
            )));
        }
        Ok(Subnets {
            base: u32::from(self.addr),
            remaining: 1u64 << u32::from(new_prefix - self.prefix),
            prefix: new_prefix,
        })
    }
}

/// Lazy iterator over the subnets of a network, in ascending address order.
///
/// Produced by [`Ipv4Net::subnets`]. Cheap to clone; cloning restarts from
/// the current position.
#[derive(Debug, Clone)]
pub struct Subnets {
    base: u32,
    remaining: u64,
    prefix: u8,
}

impl Subnets {
    /// Number of subnets not yet yielded.
    pub fn len(&self) -> u64 {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for Subnets {
    type Item = Ipv4Net;

    fn next(&mut self) -> Option<Ipv4Net> {
        if self.remaining == 0 {
            return None;
        }
        let net = Ipv4Net {
            addr: Ipv4Addr::from(self.base),
            prefix: self.prefix,
        };
        self.remaining -= 1;
        // The final step may wrap past 255.255.255.255; remaining reaches
        // zero first, so the wrapped base is never yielded.
        self.base = self.base.wrapping_add(stride(self.prefix));
        Some(net)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// Block size in addresses; 2^32 for prefix 0 truncates to 0, which only the
// wrap note above ever sees.
fn stride(prefix: u8) -> u32 {
    (1u64 << u32::from(MAX_PREFIX - prefix)) as u32
}

impl Serialize for Ipv4Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Net::from_cidr(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Ipv4Net {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
