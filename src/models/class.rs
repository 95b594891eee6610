//! Legacy (pre-CIDR) address classification.
//!
//! Classful addressing predates CIDR and is kept for didactic completeness;
//! the class is read from the first octet alone and ignores the prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// The five legacy address classes, plus `Unknown` for first octets 0 and
/// 127 (the "this network" and loopback blocks, outside the class ladder).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

impl AddressClass {
    /// Classify an address by its first octet.
    ///
    /// Total over all octet values: 1-126 → A, 128-191 → B, 192-223 → C,
    /// 224-239 → D, 240-255 → E, 0 and 127 → Unknown.
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        match addr.octets()[0] {
            1..=126 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
            _ => AddressClass::Unknown,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (Multicast)",
            AddressClass::E => "E (Experimental)",
            AddressClass::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of_octet(o: u8) -> AddressClass {
        AddressClass::of(Ipv4Addr::new(o, 0, 0, 1))
    }

    #[test]
    fn test_class_boundaries() {
        assert_eq!(class_of_octet(1), AddressClass::A);
        assert_eq!(class_of_octet(126), AddressClass::A);
        assert_eq!(class_of_octet(128), AddressClass::B);
        assert_eq!(class_of_octet(191), AddressClass::B);
        assert_eq!(class_of_octet(192), AddressClass::C);
        assert_eq!(class_of_octet(223), AddressClass::C);
        assert_eq!(class_of_octet(224), AddressClass::D);
        assert_eq!(class_of_octet(239), AddressClass::D);
        assert_eq!(class_of_octet(240), AddressClass::E);
        assert_eq!(class_of_octet(255), AddressClass::E);
    }

    #[test]
    fn test_class_unknown_octets() {
        // 0 ("this network") and 127 (loopback) sit outside the ladder.
        assert_eq!(class_of_octet(0), AddressClass::Unknown);
        assert_eq!(class_of_octet(127), AddressClass::Unknown);
    }

    #[test]
    fn test_class_total_over_all_octets() {
        for o in 0..=255u8 {
            // Must never panic; every octet maps to some class.
            let _ = class_of_octet(o);
        }
    }

    #[test]
    fn test_class_ignores_later_octets() {
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(10, 255, 255, 255)),
            AddressClass::A
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(192, 168, 10, 5)),
            AddressClass::C
        );
    }

    #[test]
    fn test_class_display() {
        assert_eq!(AddressClass::C.to_string(), "C");
        assert_eq!(AddressClass::D.to_string(), "D (Multicast)");
        assert_eq!(AddressClass::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_class_serde_variant_name() {
        assert_eq!(serde_json::to_string(&AddressClass::A).unwrap(), "\"A\"");
        let back: AddressClass = serde_json::from_str("\"Unknown\"").unwrap();
        assert_eq!(back, AddressClass::Unknown);
    }
}
