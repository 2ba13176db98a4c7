//! Computed subnet report structures.

use super::AddressClass;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The full computed result for one address/mask pair.
///
/// All fields are pure functions of the validated address, the chosen
/// prefix length and the classful default; nothing mutates after
/// construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetReport {
    /// The input address.
    pub ip_address: Ipv4Addr,
    /// Chosen prefix length (slash notation).
    pub prefix: u8,
    /// Classful default prefix implied by the leading octet.
    pub classful_default: u8,
    /// Legacy address class.
    pub class: AddressClass,
    /// Address with all host bits zeroed.
    pub network_address: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast_address: Ipv4Addr,
    /// Lowest assignable host address.
    pub first_host: Ipv4Addr,
    /// Highest assignable host address.
    pub last_host: Ipv4Addr,
    /// Total addresses in the block, network and broadcast included.
    pub total_hosts: u64,
    /// Addresses assignable to hosts.
    pub usable_hosts: u64,
    /// Which child subnet of the classful block the address falls into.
    pub subnet_id: u32,
    /// Subnet mask in dotted-decimal form.
    pub mask_dotted: String,
    /// Subnet mask as four binary octets.
    pub mask_binary: String,
    /// Every child subnet carved out of the classful block at the chosen
    /// prefix length.
    pub table: Vec<SubnetRow>,
}

/// One enumerated child subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRow {
    /// Network address of the child subnet.
    pub network: Ipv4Addr,
    /// First assignable host.
    pub first_host: Ipv4Addr,
    /// Last assignable host.
    pub last_host: Ipv4Addr,
    /// Broadcast address of the child subnet.
    pub broadcast: Ipv4Addr,
}

impl std::fmt::Display for SubnetRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}, {} - {}, {}",
            self.network, self.first_host, self.last_host, self.broadcast
        )
    }
}
