//! Error types for subnet calculation.
//!
//! Every validation failure is returned as a [`SubnetError`] value; the
//! binary decides how to present it and which exit status to use.

use std::fmt;
use thiserror::Error;

/// Why a dotted-decimal address was rejected.
///
/// Both faults are the same error kind ([`SubnetError::InvalidAddress`]),
/// they only differ in the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFault {
    /// Wrong number of octets, or a numeric octet above 255.
    Invalid,
    /// An octet that is empty or not a plain decimal number.
    Format,
}

impl fmt::Display for AddressFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFault::Invalid => write!(f, "Invalid IP address."),
            AddressFault::Format => write!(f, "Invalid IP address format."),
        }
    }
}

/// Main error type for subnet-calculator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubnetError {
    /// Prefix length outside 0..=32.
    #[error("Invalid CIDR. Must be between 0 and 32.")]
    InvalidPrefix { prefix: i64 },

    /// Address is not four dot-separated decimal octets in 0..=255.
    #[error("{fault}")]
    InvalidAddress { input: String, fault: AddressFault },

    /// Wrong command-line invocation.
    #[error("{message}")]
    Usage { message: String },

    /// Output could not be rendered.
    #[error("Render error: {message}")]
    Render { message: String },
}

impl SubnetError {
    /// Get the process exit code for this error type
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Usage { .. } => 1,
            Self::InvalidPrefix { .. } => 2,
            Self::InvalidAddress { .. } => 3,
            Self::Render { .. } => 4,
        }
    }

    /// Create an invalid-address error
    pub fn invalid_address<S: Into<String>>(input: S, fault: AddressFault) -> Self {
        Self::InvalidAddress {
            input: input.into(),
            fault,
        }
    }

    /// Create a usage error
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// True for errors raised while validating calculator input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPrefix { .. } | Self::InvalidAddress { .. }
        )
    }
}
