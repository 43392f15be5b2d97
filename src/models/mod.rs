//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and arithmetic:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetDescriptor`] - everything derived from an address and prefix

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    check_prefix, host_count, parse_dotted_quad, usable_host_count, Ipv4, MAX_LENGTH,
};
pub use subnet::{compute, SubnetDescriptor};
