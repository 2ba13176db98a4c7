//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and primitives:
//! - [`AddressClass`] - legacy classful classification of an address
//! - [`MaskSpec`] - tagged subnet-mask argument (prefix or dotted form)
//! - [`SubnetReport`] and [`SubnetRow`] - the computed result
//! - bit-level address arithmetic in [`ipv4`](self::ipv4)

mod address;
pub mod ipv4;
mod mask;
mod report;

// Re-export public types
pub use address::{parse_address, AddressClass};
pub use ipv4::{
    broadcast_addr, from_bit_string, get_prefix_mask, host_range, network_addr, subnet_id,
    to_bit_string, total_hosts, usable_hosts, MAX_LENGTH,
};
pub use mask::{mask_binary, mask_dotted, MaskSpec};
pub use report::{SubnetReport, SubnetRow};
