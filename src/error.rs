//! Error taxonomy for subnet calculations.
//!
//! Every failure is a deterministic input-validation error surfaced
//! before any derived field is computed. Nothing here is retryable.

use thiserror::Error;

/// Validation errors returned by the calculator entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The address text does not match the dotted-decimal pattern, or its
    /// leading octet falls in the reserved/loopback/multicast range.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Prefix length out of range or below the classful default, or a
    /// dotted-decimal mask with a non-canonical or illegal trailing octet.
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),

    /// The mask argument is neither a prefix length nor a dotted quad.
    #[error("Invalid subnet mask type: {0}")]
    InvalidMaskType(String),
}
