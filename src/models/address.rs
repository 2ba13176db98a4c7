//! Address validation and legacy classful classification.

use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

lazy_static! {
    static ref ADDRESS_RE: Regex =
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("Invalid Regex?");
}

/// Legacy address class implied by the leading octet.
///
/// Carries the classful default prefix length used as the lower bound of
/// subnet enumeration.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
}

impl AddressClass {
    /// Classify an address by its leading octet.
    ///
    /// Leading octet 0, 127 (loopback) and anything from 224 up
    /// (multicast/reserved) is not a classful A/B/C address.
    pub fn from_leading_octet(octet: u8) -> Result<AddressClass, CalcError> {
        match octet {
            1..=126 => Ok(AddressClass::A),
            128..=191 => Ok(AddressClass::B),
            192..=223 => Ok(AddressClass::C),
            _ => Err(CalcError::InvalidAddress(format!(
                "the first octet can't be 0, 127, or greater than 223, got {octet}"
            ))),
        }
    }

    /// The classful default prefix length (A=8, B=16, C=24).
    pub fn default_prefix(&self) -> u8 {
        match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
        }
    }

    /// The class letter.
    pub fn letter(&self) -> char {
        match self {
            AddressClass::A => 'A',
            AddressClass::B => 'B',
            AddressClass::C => 'C',
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Validate and parse an address string, returning the address together
/// with its class.
pub fn parse_address(text: &str) -> Result<(Ipv4Addr, AddressClass), CalcError> {
    let text = text.trim();
    if !ADDRESS_RE.is_match(text) {
        return Err(CalcError::InvalidAddress(format!(
            "'{text}' doesn't match standard dotted-decimal format"
        )));
    }
    let addr: Ipv4Addr = text.parse().map_err(|_| {
        CalcError::InvalidAddress(format!("'{text}' has an octet outside 0-255"))
    })?;
    let class = AddressClass::from_leading_octet(addr.octets()[0])?;
    Ok((addr, class))
}
