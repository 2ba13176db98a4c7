//! IPv4 bit-arithmetic primitives.
//!
//! All address math is done on native `u32` values with shifts and masks.
//! The 32-character bit-string form ([`to_bit_string`] / [`from_bit_string`])
//! survives as a rendering and diagnostic primitive and must round-trip
//! exactly.

use crate::error::CalcError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_prefix_mask;
/// assert_eq!(get_prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_prefix_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidMask(format!(
            "prefix length /{len} is too long"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
///
/// Zeroes out every bit below the prefix boundary.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidMask(format!(
            "prefix length /{len} is too long"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
///
/// Sets every bit below the prefix boundary to one.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidMask(format!(
            "prefix length /{len} is too long"
        )))
    } else {
        let mask = get_prefix_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// Calculate the usable host range for a given IP and prefix length.
///
/// The first host is the network address with its final bit forced to one;
/// the last host is the broadcast address with its final bit forced to zero.
/// Returns `(first_host, last_host)`.
pub fn host_range(addr: Ipv4Addr, len: u8) -> Result<(Ipv4Addr, Ipv4Addr), CalcError> {
    let network_bits = u32::from(network_addr(addr, len)?);
    let broadcast_bits = u32::from(broadcast_addr(addr, len)?);

    let first_host = network_bits | 1;
    let last_host = broadcast_bits & !1u32;

    Ok((Ipv4Addr::from(first_host), Ipv4Addr::from(last_host)))
}

/// Total addresses in the block, including network and broadcast.
pub fn total_hosts(len: u8) -> Result<u64, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidMask(format!(
            "prefix length /{len} is too long"
        )))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Addresses assignable to hosts, i.e. total minus network and broadcast.
pub fn usable_hosts(len: u8) -> Result<u64, CalcError> {
    Ok(total_hosts(len)?.saturating_sub(2))
}

/// Integer value of the address bits between the classful default prefix
/// and the chosen prefix. Identifies which child subnet the address falls
/// into within its classful block. An empty or inverted span yields 0.
pub fn subnet_id(addr: Ipv4Addr, default_len: u8, len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        return Err(CalcError::InvalidMask(format!(
            "prefix length /{len} is too long"
        )));
    }
    if len <= default_len {
        return Ok(0);
    }
    let span = len - default_len;
    let shifted = u32::from(addr) >> (MAX_LENGTH - len);
    Ok(shifted & ((1u32 << span) - 1))
}

/// Render an address as a 32-character string of '0'/'1' bits.
pub fn to_bit_string(addr: Ipv4Addr) -> String {
    format!("{:032b}", u32::from(addr))
}

/// Parse a 32-character string of '0'/'1' bits back into an address,
/// grouping into four octets.
pub fn from_bit_string(bits: &str) -> Result<Ipv4Addr, CalcError> {
    if bits.len() != 32 {
        return Err(CalcError::InvalidAddress(format!(
            "bit string must be 32 characters, got {}",
            bits.len()
        )));
    }
    let mut octets = [0u8; 4];
    for (i, chunk) in bits.as_bytes().chunks(8).enumerate() {
        let group = std::str::from_utf8(chunk)
            .map_err(|_| CalcError::InvalidAddress("bit string is not ASCII".to_string()))?;
        octets[i] = u8::from_str_radix(group, 2).map_err(|_| {
            CalcError::InvalidAddress(format!("bit string group '{group}' is not binary"))
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}
