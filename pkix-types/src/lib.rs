//! PKIX (Public Key Infrastructure using X.509) Common Types
//!
//! Value types shared by the X.509 builders, validated on construction:
//! - RFC 5280 4.1.2.2: CertificateSerialNumber
//! - RFC 5280 4.1.2.4: Name, RelativeDistinguishedName, AttributeTypeAndValue
//! - ObjectIdentifier in dotted form

#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod name;
pub mod oid;
pub mod oid_name;
pub mod serial_number;

pub use error::{Error, Result};
pub use name::{AttributeTypeAndValue, Name, RelativeDistinguishedName};
pub use oid::ObjectIdentifier;
pub use oid_name::OidName;
pub use serial_number::{CertificateSerialNumber, MAX_SERIAL_NUMBER_BITS};
