//! Subnet mask specification and rendering.

use crate::error::CalcError;
use crate::models::ipv4::get_prefix_mask;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Octet values a contiguous subnet mask can contain.
const VALID_MASK_OCTETS: [u8; 9] = [0, 128, 192, 224, 240, 248, 252, 254, 255];

/// A subnet mask as supplied by the caller: either a prefix length or a
/// dotted-decimal mask string. Branching on the variant replaces any
/// type-based dispatch on the raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskSpec {
    /// Slash-notation prefix length, e.g. `30`.
    Prefix(u8),
    /// Dotted-decimal mask, e.g. `"255.255.255.252"`.
    Dotted(String),
}

impl MaskSpec {
    /// Parse a raw mask argument. Digits become a [`MaskSpec::Prefix`],
    /// anything containing a dot becomes a [`MaskSpec::Dotted`]; any other
    /// shape is rejected as a type error.
    pub fn parse(text: &str) -> Result<MaskSpec, CalcError> {
        let text = text.trim();
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            let len: u8 = text.parse().map_err(|_| {
                CalcError::InvalidMask(format!("prefix length '{text}' is out of range"))
            })?;
            Ok(MaskSpec::Prefix(len))
        } else if text.contains('.') {
            Ok(MaskSpec::Dotted(text.to_string()))
        } else {
            Err(CalcError::InvalidMaskType(format!(
                "'{text}' is neither a prefix length nor a dotted-decimal mask"
            )))
        }
    }

    /// Validate the mask against the classful default prefix and resolve
    /// it to an effective prefix length.
    ///
    /// A prefix length must lie in `[default_prefix, 31)`. A dotted mask
    /// must consist of four canonical octets with a trailing octet below
    /// 255; its prefix is the count of one-bits across all 32 mask bits.
    pub fn resolve(&self, default_prefix: u8) -> Result<u8, CalcError> {
        match self {
            MaskSpec::Prefix(len) => {
                if *len >= 31 {
                    Err(CalcError::InvalidMask(format!(
                        "prefix length /{len} leaves no usable hosts"
                    )))
                } else if *len < default_prefix {
                    Err(CalcError::InvalidMask(format!(
                        "prefix length /{len} is below the classful default /{default_prefix}"
                    )))
                } else {
                    Ok(*len)
                }
            }
            MaskSpec::Dotted(text) => {
                let parts: Vec<&str> = text.split('.').collect();
                if parts.len() != 4 {
                    return Err(CalcError::InvalidMask(format!(
                        "'{text}' is not a four-octet mask"
                    )));
                }
                let mut octets = [0u8; 4];
                for (i, part) in parts.iter().enumerate() {
                    let octet: u8 = part.parse().map_err(|_| {
                        CalcError::InvalidMask(format!("mask octet '{part}' is not a number"))
                    })?;
                    if !VALID_MASK_OCTETS.contains(&octet) {
                        return Err(CalcError::InvalidMask(format!(
                            "mask octet {octet} is not a contiguous-mask value"
                        )));
                    }
                    octets[i] = octet;
                }
                if octets[3] == 255 {
                    return Err(CalcError::InvalidMask(format!(
                        "'{text}' has an illegal trailing octet"
                    )));
                }
                let ones: u32 = octets.iter().map(|o| o.count_ones()).sum();
                Ok(ones as u8)
            }
        }
    }
}

/// Render the mask for a prefix length in dotted-decimal form.
pub fn mask_dotted(len: u8) -> Result<String, CalcError> {
    let mask = Ipv4Addr::from(get_prefix_mask(len)?);
    Ok(mask.octets().iter().map(|o| format!("{o}")).join("."))
}

/// Render the mask for a prefix length as four zero-padded binary octets.
pub fn mask_binary(len: u8) -> Result<String, CalcError> {
    let mask = Ipv4Addr::from(get_prefix_mask(len)?);
    Ok(mask.octets().iter().map(|o| format!("{o:08b}")).join("."))
}
