//! Integration tests for subnet-calc
//!
//! These tests verify the complete workflow from raw input strings to the
//! finished report.

use std::net::Ipv4Addr;
use subnet_calc::{calculate, CalcError, MaskSpec};

#[test]
fn test_full_report_class_c() {
    let report = calculate("192.168.1.129", "30").expect("Failed to build report");

    assert_eq!(report.network_address, Ipv4Addr::new(192, 168, 1, 128));
    assert_eq!(report.broadcast_address, Ipv4Addr::new(192, 168, 1, 131));
    assert_eq!(report.first_host, Ipv4Addr::new(192, 168, 1, 129));
    assert_eq!(report.last_host, Ipv4Addr::new(192, 168, 1, 130));
    assert_eq!(report.total_hosts, 4);
    assert_eq!(report.usable_hosts, 2);
    assert_eq!(report.mask_dotted, "255.255.255.252");
    assert_eq!(report.class.letter(), 'C');
    assert_eq!(report.table.len(), 64, "Expected 2^(30-24) subnets");

    // every row stays inside the classful block and they never overlap
    for pair in report.table.windows(2) {
        assert!(pair[0].broadcast < pair[1].network);
    }
    assert_eq!(report.table[0].network, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(
        report.table.last().unwrap().broadcast,
        Ipv4Addr::new(192, 168, 1, 255)
    );
}

#[test]
fn test_full_report_class_a_advisory() {
    // /8 on a class A address does not subdivide the block; this is a
    // warning, not an error
    let report = calculate("10.0.0.1", "8").expect("Failed to build report");

    assert_eq!(report.classful_default, 8);
    assert_eq!(report.usable_hosts, (1u64 << 24) - 2);
    assert_eq!(report.table.len(), 1);
}

#[test]
fn test_dotted_mask_programmatic_path() {
    let report = calculate("172.16.10.40", "255.255.255.0").expect("Failed to build report");

    assert_eq!(report.prefix, 24);
    assert_eq!(report.class.letter(), 'B');
    assert_eq!(report.network_address, Ipv4Addr::new(172, 16, 10, 0));
    assert_eq!(report.table.len(), 256, "Expected 2^(24-16) subnets");
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        calculate("0.1.1.1", "24").unwrap_err(),
        CalcError::InvalidAddress(_)
    ));
    assert!(matches!(
        calculate("192.168.1.1", "31").unwrap_err(),
        CalcError::InvalidMask(_)
    ));
    assert!(matches!(
        calculate("192.168.1.1", "255.255.255.255").unwrap_err(),
        CalcError::InvalidMask(_)
    ));
    assert!(matches!(
        calculate("192.168.1.1", "wide").unwrap_err(),
        CalcError::InvalidMaskType(_)
    ));
}

#[test]
fn test_mask_spec_round_trip_through_builder() {
    let via_prefix = subnet_calc::build("192.168.1.129", MaskSpec::Prefix(30))
        .expect("Failed to build report");
    let via_dotted = subnet_calc::build(
        "192.168.1.129",
        MaskSpec::Dotted("255.255.255.252".to_string()),
    )
    .expect("Failed to build report");

    assert_eq!(via_prefix.prefix, via_dotted.prefix);
    assert_eq!(via_prefix.network_address, via_dotted.network_address);
    assert_eq!(via_prefix.table.len(), via_dotted.table.len());
}
