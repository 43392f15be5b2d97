//! Subnet calculation result.

use super::ipv4::{check_prefix, host_count, parse_dotted_quad, usable_host_count, Ipv4};
use crate::error::SubnetError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one address and prefix length.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// The address text exactly as the caller passed it.
    pub input: String,
    /// The parsed address.
    pub address: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
    /// Network in CIDR notation, host bits cleared.
    pub cidr: Ipv4,
    /// Subnet mask.
    pub mask: Ipv4Addr,
    /// Inverse of the subnet mask.
    pub wildcard: Ipv4Addr,
    /// `2^(32 - prefix)`; needs 64 bits at /0.
    pub total_hosts: u64,
    /// Hosts excluding network and broadcast, where that applies.
    pub usable_hosts: u64,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
}

/// Compute the subnet facts for a dotted-decimal `address` and `prefix`.
///
/// The prefix is validated first, then the address.
///
/// # Examples
/// ```
/// use subnet_calculator::compute;
/// let subnet = compute("192.168.1.0", 24).unwrap();
/// assert_eq!(subnet.broadcast_address.to_string(), "192.168.1.255");
/// assert_eq!(subnet.usable_hosts, 254);
/// ```
pub fn compute(address: &str, prefix: i64) -> Result<SubnetDescriptor, SubnetError> {
    let len = check_prefix(prefix)?;
    let addr = parse_dotted_quad(address)?;
    let subnet = Ipv4::from_parts(addr, len.into())?;
    log::debug!("compute({address}, {prefix}) -> {}", subnet.network());

    let total_hosts = host_count(len)?;
    let usable_hosts = usable_host_count(len)?;
    let network_address = subnet.lo();
    let broadcast_address = subnet.hi();

    // Offsets only apply when network and broadcast were actually reserved;
    // /31 and /32 use the whole range. total_hosts > 2 also rules out
    // usable_hosts == 0 and keeps the +1/-1 from wrapping.
    let (first_usable, last_usable) = if total_hosts > 2 && usable_hosts > 0 {
        (
            Ipv4Addr::from(u32::from(network_address) + 1),
            Ipv4Addr::from(u32::from(broadcast_address) - 1),
        )
    } else {
        (network_address, broadcast_address)
    };

    Ok(SubnetDescriptor {
        input: address.to_string(),
        address: addr,
        prefix: len,
        cidr: subnet.network(),
        mask: subnet.netmask(),
        wildcard: subnet.wildcard(),
        total_hosts,
        usable_hosts,
        network_address,
        broadcast_address,
        first_usable,
        last_usable,
    })
}
