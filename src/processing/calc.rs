//! Subnet report construction.

use crate::error::CalcError;
use crate::models::{
    broadcast_addr, host_range, mask_binary, mask_dotted, network_addr, parse_address, subnet_id,
    total_hosts, usable_hosts, MaskSpec, SubnetReport,
};
use crate::processing::enumerate_subnets;

/// Build the full [`SubnetReport`] for an address and mask.
///
/// Validation runs first; no derived field is computed once either input
/// is rejected. A mask that does not actually subdivide the classful
/// block is a warning, not an error.
///
/// # Arguments
/// * `address_text` - dotted-decimal IPv4 address
/// * `mask` - the mask specification, prefix or dotted form
pub fn build(address_text: &str, mask: MaskSpec) -> Result<SubnetReport, CalcError> {
    log::info!("#Start build() address={address_text} mask={mask:?}");

    let (addr, class) = parse_address(address_text)?;
    let classful_default = class.default_prefix();
    let prefix = mask.resolve(classful_default)?;

    if classful_default >= prefix {
        log::warn!(
            "Default subnet mask /{classful_default} is greater than or equal to given subnet mask /{prefix}"
        );
    }

    let network_address = network_addr(addr, prefix)?;
    let broadcast_address = broadcast_addr(addr, prefix)?;
    let (first_host, last_host) = host_range(addr, prefix)?;
    let table = enumerate_subnets(addr, classful_default, prefix)?;

    log::debug!(
        "build() network={network_address} broadcast={broadcast_address} rows={}",
        table.len()
    );

    Ok(SubnetReport {
        ip_address: addr,
        prefix,
        classful_default,
        class,
        network_address,
        broadcast_address,
        first_host,
        last_host,
        total_hosts: total_hosts(prefix)?,
        usable_hosts: usable_hosts(prefix)?,
        subnet_id: subnet_id(addr, classful_default, prefix)?,
        mask_dotted: mask_dotted(prefix)?,
        mask_binary: mask_binary(prefix)?,
        table,
    })
}
