//! Child-subnet enumeration within a classful block.

use crate::error::CalcError;
use crate::models::{broadcast_addr, get_prefix_mask, host_range, network_addr, SubnetRow};
use std::net::Ipv4Addr;

/// Enumerate every subnet at `prefix` within the classful block of `addr`.
///
/// For each index a synthetic address is spliced together from the
/// address's top `classful_default` bits, the index in the span between
/// the classful default and the chosen prefix, and the address's
/// remaining host bits; the row derivations then run on it at the chosen
/// prefix. The spread is `2^(prefix - classful_default)` rows; an empty
/// or inverted span yields the single row covering the whole block.
///
/// A /30 inside a class A block spreads to 2^22 rows. The work is bounded
/// but large; callers that only display results should cap the rows they
/// render, not the computation.
pub fn enumerate_subnets(
    addr: Ipv4Addr,
    classful_default: u8,
    prefix: u8,
) -> Result<Vec<SubnetRow>, CalcError> {
    let span = prefix.saturating_sub(classful_default);
    let count = 1u64 << span;
    log::info!("#Start enumerate_subnets() span={span} count={count}");

    let bits = u32::from(addr);
    let class_bits = bits & get_prefix_mask(classful_default.min(prefix))?;
    let host_bits = bits & !get_prefix_mask(prefix)?;

    let mut rows = Vec::with_capacity(count as usize);
    for i in 0..count {
        let spliced = if span == 0 {
            bits
        } else {
            class_bits | ((i as u32) << (32 - prefix)) | host_bits
        };
        let spliced = Ipv4Addr::from(spliced);

        let (first_host, last_host) = host_range(spliced, prefix)?;
        rows.push(SubnetRow {
            network: network_addr(spliced, prefix)?,
            first_host,
            last_host,
            broadcast: broadcast_addr(spliced, prefix)?,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_class_c_slash_30() {
        let rows =
            enumerate_subnets(Ipv4Addr::new(192, 168, 1, 129), 24, 30).expect("enumerate failed");
        assert_eq!(rows.len(), 64);

        assert_eq!(rows[0].network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(rows[0].first_host, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(rows[0].last_host, Ipv4Addr::new(192, 168, 1, 2));
        assert_eq!(rows[0].broadcast, Ipv4Addr::new(192, 168, 1, 3));

        // the row holding the input address
        assert_eq!(rows[32].network, Ipv4Addr::new(192, 168, 1, 128));
        assert_eq!(rows[32].first_host, Ipv4Addr::new(192, 168, 1, 129));
        assert_eq!(rows[32].last_host, Ipv4Addr::new(192, 168, 1, 130));
        assert_eq!(rows[32].broadcast, Ipv4Addr::new(192, 168, 1, 131));

        assert_eq!(rows[63].network, Ipv4Addr::new(192, 168, 1, 252));
        assert_eq!(rows[63].broadcast, Ipv4Addr::new(192, 168, 1, 255));
    }

    #[test]
    fn test_enumerate_covers_classful_block() {
        let rows =
            enumerate_subnets(Ipv4Addr::new(192, 168, 1, 129), 24, 28).expect("enumerate failed");
        assert_eq!(rows.len(), 16);

        // strictly increasing, disjoint, and contiguous over the block
        assert_eq!(rows[0].network, Ipv4Addr::new(192, 168, 1, 0));
        for pair in rows.windows(2) {
            let prev_broadcast = u32::from(pair[0].broadcast);
            let next_network = u32::from(pair[1].network);
            assert_eq!(next_network, prev_broadcast + 1);
        }
        assert_eq!(
            rows.last().unwrap().broadcast,
            Ipv4Addr::new(192, 168, 1, 255)
        );
    }

    #[test]
    fn test_enumerate_class_b_spread() {
        let rows =
            enumerate_subnets(Ipv4Addr::new(172, 16, 0, 1), 16, 20).expect("enumerate failed");
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0].network, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(rows[1].network, Ipv4Addr::new(172, 16, 16, 0));
        assert_eq!(
            rows.last().unwrap().broadcast,
            Ipv4Addr::new(172, 16, 255, 255)
        );
    }

    #[test]
    fn test_enumerate_empty_span() {
        // prefix equal to the classful default: one row, the whole block
        let rows = enumerate_subnets(Ipv4Addr::new(10, 0, 0, 1), 8, 8).expect("enumerate failed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].network, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(rows[0].broadcast, Ipv4Addr::new(10, 255, 255, 255));
    }

    #[test]
    fn test_enumerate_inverted_span() {
        // a dotted mask can resolve below the classful default; the span
        // collapses to the single block at the chosen prefix
        let rows = enumerate_subnets(Ipv4Addr::new(192, 168, 1, 1), 24, 16).expect("enumerate failed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].network, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(rows[0].broadcast, Ipv4Addr::new(192, 168, 255, 255));
    }
}
