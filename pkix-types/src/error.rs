//! Error types for PKIX types

use thiserror::Error;

/// Result type for PKIX types operations
pub type Result<T> = std::result::Result<T, Error>;

/// PKIX types error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // ObjectIdentifier errors
    #[error("ObjectIdentifier: empty string")]
    ObjectIdentifierEmpty,
    #[error("ObjectIdentifier: invalid component '{0}'")]
    ObjectIdentifierInvalidComponent(String),
    #[error("ObjectIdentifier: too few components (need at least 2), got {0}")]
    ObjectIdentifierTooFewComponents(usize),
    #[error("ObjectIdentifier: first arc must be 0, 1 or 2, got {0}")]
    ObjectIdentifierInvalidFirstArc(u64),

    // CertificateSerialNumber errors
    #[error("CertificateSerialNumber: serial number must be positive")]
    SerialNumberNotPositive,
    #[error("CertificateSerialNumber: serial number must be less than 160 bits, got {0} bits")]
    SerialNumberTooLarge(u64),

    // Name errors
    #[error("Name: attribute value for {0} must not be empty")]
    NameEmptyAttributeValue(String),
    #[error("Name: relative distinguished name must not be empty")]
    NameEmptyRdn,
}
