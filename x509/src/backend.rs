//! Signing backend interface
//!
//! The builders validate structure only. Encoding to DER and producing
//! the signature is left to an implementation of [`Backend`].

use std::fmt;

use pkix_types::OidName;
use serde::{Deserialize, Serialize};

use crate::crl::TbsCertList;

/// Digest used in the signature over a to-be-signed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashAlgorithm {
    pub const OID_SHA1: &'static str = "1.3.14.3.2.26";
    pub const OID_SHA224: &'static str = "2.16.840.1.101.3.4.2.4";
    pub const OID_SHA256: &'static str = "2.16.840.1.101.3.4.2.1";
    pub const OID_SHA384: &'static str = "2.16.840.1.101.3.4.2.2";
    pub const OID_SHA512: &'static str = "2.16.840.1.101.3.4.2.3";
    pub const OID_SHA3_224: &'static str = "2.16.840.1.101.3.4.2.7";
    pub const OID_SHA3_256: &'static str = "2.16.840.1.101.3.4.2.8";
    pub const OID_SHA3_384: &'static str = "2.16.840.1.101.3.4.2.9";
    pub const OID_SHA3_512: &'static str = "2.16.840.1.101.3.4.2.10";

    pub fn oid(self) -> &'static str {
        match self {
            Self::Sha1 => Self::OID_SHA1,
            Self::Sha224 => Self::OID_SHA224,
            Self::Sha256 => Self::OID_SHA256,
            Self::Sha384 => Self::OID_SHA384,
            Self::Sha512 => Self::OID_SHA512,
            Self::Sha3_224 => Self::OID_SHA3_224,
            Self::Sha3_256 => Self::OID_SHA3_256,
            Self::Sha3_384 => Self::OID_SHA3_384,
            Self::Sha3_512 => Self::OID_SHA3_512,
        }
    }

    /// Digest size in bytes.
    pub fn digest_size(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }
}

impl OidName for HashAlgorithm {
    fn oid_name(&self) -> Option<&'static str> {
        let name = match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        };
        Some(name)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.oid_name().unwrap_or_else(|| self.oid()))
    }
}

/// A cryptographic backend able to encode and sign revocation lists.
///
/// Implementations own key handling and DER encoding. `algorithm` is
/// `None` for signature schemes that hash internally, such as Ed25519.
pub trait Backend {
    type PrivateKey: ?Sized;
    type Signed;
    type Error: std::error::Error + Send + Sync + 'static;

    fn sign_crl(
        &self,
        tbs: &TbsCertList,
        key: &Self::PrivateKey,
        algorithm: Option<HashAlgorithm>,
    ) -> Result<Self::Signed, Self::Error>;
}
