//! # kumiki-x509
//!
//! Builders for X.509 revocation artifacts.
//!
//! - [`RevokedCertificateBuilder`] assembles one CRL entry
//!   (RFC 5280 Section 5.1) and freezes it into a [`RevokedCertificate`].
//! - [`CertificateRevocationListBuilder`] collects entries and CRL
//!   extensions and passes the frozen [`TbsCertList`] to a [`Backend`].
//!
//! Every value is checked when it is set. Setters take `&self` and return
//! a new builder, so a failed call leaves the caller's builder as it was.
//!
//! ```
//! use chrono::{FixedOffset, NaiveDate, TimeZone};
//! use kumiki_x509::RevokedCertificateBuilder;
//!
//! let tz = FixedOffset::west_opt(8 * 3600).unwrap();
//! let local = NaiveDate::from_ymd_opt(2012, 1, 16).unwrap().and_hms_opt(22, 43, 0).unwrap();
//!
//! let revoked = RevokedCertificateBuilder::new()
//!     .serial_number(333)?
//!     .revocation_date(tz.from_local_datetime(&local).unwrap())?
//!     .build()?;
//!
//! assert_eq!(revoked.revocation_date_utc().to_rfc3339(), "2012-01-17T06:43:00+00:00");
//! # Ok::<(), kumiki_x509::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod backend;
pub mod crl;
pub mod deprecation;
pub mod error;
pub mod extensions;
pub mod revoked;
pub mod time;

pub use backend::{Backend, HashAlgorithm};
pub use crl::{CertificateRevocationListBuilder, TbsCertList};
pub use error::{Error, ErrorKind, Field, Result};
pub use extensions::{Extension, ExtensionValue, Extensions, StandardExtension, TypedExtension};
pub use revoked::{RevokedCertificate, RevokedCertificateBuilder};
pub use time::AsUtc;

pub use pkix_types::{CertificateSerialNumber, Name, ObjectIdentifier};
