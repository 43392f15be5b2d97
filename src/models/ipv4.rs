//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing a network in CIDR notation,
//! strict dotted-decimal parsing, and the mask arithmetic used by the
//! subnet calculator.

use crate::error::{AddressFault, SubnetError};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Validate a prefix length given as any integer.
///
/// # Examples
/// ```
/// use subnet_calculator::models::check_prefix;
/// assert_eq!(check_prefix(24).unwrap(), 24);
/// assert!(check_prefix(-1).is_err());
/// ```
pub fn check_prefix(prefix: i64) -> Result<u8, SubnetError> {
    match u8::try_from(prefix) {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(SubnetError::InvalidPrefix { prefix }),
    }
}

// caller guarantees len <= MAX_LENGTH
fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    // 64-bit intermediate keeps /0 from shifting a u32 by 32
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Number of addresses covered by a prefix, `2^(32 - len)`.
pub fn host_count(len: u8) -> Result<u64, SubnetError> {
    if len > MAX_LENGTH {
        return Err(SubnetError::InvalidPrefix { prefix: len.into() });
    }
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Hosts left once network and broadcast are reserved.
///
/// /31 and /32 keep every address (point-to-point links and host routes).
pub fn usable_host_count(len: u8) -> Result<u64, SubnetError> {
    let total = host_count(len)?;
    Ok(if total > 2 { total - 2 } else { total })
}

/// Parse a strict dotted-decimal IPv4 address.
///
/// Exactly four tokens, each made only of ASCII digits with a value in
/// 0..=255. Leading zeros are accepted as plain decimal. The first bad
/// token, scanning left to right, decides the reported fault.
pub fn parse_dotted_quad(input: &str) -> Result<Ipv4Addr, SubnetError> {
    let (a, b, c, d) = input
        .split('.')
        .collect_tuple::<(&str, &str, &str, &str)>()
        .ok_or_else(|| SubnetError::invalid_address(input, AddressFault::Invalid))?;

    let mut octets = [0u8; 4];
    for (slot, token) in octets.iter_mut().zip([a, b, c, d]) {
        *slot = parse_octet(token).map_err(|fault| SubnetError::invalid_address(input, fault))?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(token: &str) -> Result<u8, AddressFault> {
    let all_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(token) {
        // a negative number is well formed, just below the octet range
        return match token.strip_prefix('-') {
            Some(magnitude) if all_digits(magnitude) => Err(AddressFault::Invalid),
            _ => Err(AddressFault::Format),
        };
    }
    // only digits left, so the sole failure is a value above 255
    token.parse::<u8>().map_err(|_| AddressFault::Invalid)
}

/// IPv4 address with CIDR notation support.
///
/// The prefix length is validated on construction, so [`Ipv4::lo`] and
/// [`Ipv4::hi`] never fail.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Build from an already parsed address and a prefix length.
    pub fn from_parts(addr: Ipv4Addr, prefix: i64) -> Result<Ipv4, SubnetError> {
        Ok(Ipv4 {
            addr,
            mask: check_prefix(prefix)?,
        })
    }

    /// The subnet mask as an address.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    /// The wildcard (inverse) mask as an address.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.mask_bits())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// The same prefix with the host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    fn mask_bits(&self) -> u32 {
        prefix_mask(self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
