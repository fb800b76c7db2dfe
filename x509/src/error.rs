use chrono::{DateTime, Utc};
use thiserror::Error;

/// Broad class of an [`Error`], for callers that need to tell invalid
/// input apart from a missing lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value of the wrong kind was supplied, e.g. a certificate-only
    /// extension given to a CRL entry.
    Type,
    /// The kind is right but the value is out of range, repeated, or
    /// a required field is missing.
    Value,
    /// A lookup found nothing.
    NotFound,
    /// The backend refused to sign.
    Backend,
}

/// Builder field names used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SerialNumber,
    RevocationDate,
    IssuerName,
    LastUpdate,
    NextUpdate,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerialNumber => write!(f, "serial number"),
            Self::RevocationDate => write!(f, "revocation date"),
            Self::IssuerName => write!(f, "issuer name"),
            Self::LastUpdate => write!(f, "last update"),
            Self::NextUpdate => write!(f, "next update"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} may only be set once")]
    AlreadySet(Field),
    #[error("a {context} must have a {field}")]
    MissingField {
        context: &'static str,
        field: Field,
    },
    #[error("{field} must be on or after 1950-01-01, got {value}")]
    TimeBefore1950 {
        field: &'static str,
        value: DateTime<Utc>,
    },
    #[error("next update {next} must not be earlier than last update {last}")]
    NextUpdateBeforeLastUpdate {
        last: DateTime<Utc>,
        next: DateTime<Utc>,
    },
    #[error("this extension has already been set: {0}")]
    DuplicateExtension(String),
    #[error("{extension} is not a valid extension for a {context}")]
    UnsupportedExtension {
        extension: &'static str,
        context: &'static str,
    },
    #[error("no {0} extension was found")]
    ExtensionNotFound(String),
    #[error("invalid {extension}: {reason}")]
    InvalidExtensionValue {
        extension: &'static str,
        reason: String,
    },
    #[error("backend failed to sign: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("PKIX types error: {0}")]
    PKIXTypesError(#[from] pkix_types::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedExtension { .. } => ErrorKind::Type,
            Self::ExtensionNotFound(_) => ErrorKind::NotFound,
            Self::Backend(_) => ErrorKind::Backend,
            Self::AlreadySet(_)
            | Self::MissingField { .. }
            | Self::TimeBefore1950 { .. }
            | Self::NextUpdateBeforeLastUpdate { .. }
            | Self::DuplicateExtension(_)
            | Self::InvalidExtensionValue { .. }
            | Self::PKIXTypesError(_) => ErrorKind::Value,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
