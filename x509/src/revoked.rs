//! Revoked certificate entries
//!
//! [`RevokedCertificateBuilder`] collects the fields of one CRL entry and
//! validates each as it is set. [`RevokedCertificateBuilder::build`]
//! freezes them into a [`RevokedCertificate`].
//!
//! ```
//! use chrono::NaiveDate;
//! use kumiki_x509::RevokedCertificateBuilder;
//! use kumiki_x509::extensions::{CrlReason, ReasonFlags};
//!
//! let revoked = RevokedCertificateBuilder::new()
//!     .serial_number(333)?
//!     .revocation_date(NaiveDate::from_ymd_opt(2002, 1, 1).unwrap().and_hms_opt(12, 1, 0).unwrap())?
//!     .add_extension(CrlReason::new(ReasonFlags::KeyCompromise), false)?
//!     .build()?;
//!
//! assert_eq!(revoked.serial_number().to_string(), "01:4d");
//! assert_eq!(revoked.extensions().len(), 1);
//! # Ok::<(), kumiki_x509::Error>(())
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use num_bigint::BigInt;
use pkix_types::CertificateSerialNumber;
use serde::Serialize;

use crate::backend::Backend;
use crate::deprecation::{self, Deprecation};
use crate::error::{Error, Field, Result};
use crate::extensions::{Context, ExtensionValue, Extensions};
use crate::time::{self, AsUtc};

/*
RFC 5280 Section 5.1
revokedCertificates     SEQUENCE OF SEQUENCE  {
     userCertificate         CertificateSerialNumber,
     revocationDate          Time,
     crlEntryExtensions      Extensions OPTIONAL
                              -- if present, version MUST be v2
                          }  OPTIONAL,
*/

/// Builder for a [`RevokedCertificate`].
///
/// Every setter leaves `self` untouched and returns an updated copy, so
/// a rejected value never changes a builder the caller still holds.
#[derive(Debug, Clone, Default)]
pub struct RevokedCertificateBuilder {
    serial_number: Option<CertificateSerialNumber>,
    revocation_date: Option<DateTime<Utc>>,
    extensions: Extensions,
}

impl RevokedCertificateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serial number of the revoked certificate.
    ///
    /// The value must be positive and shorter than 160 bits, and may only
    /// be set once.
    pub fn serial_number(&self, value: impl Into<BigInt>) -> Result<Self> {
        if self.serial_number.is_some() {
            return Err(Error::AlreadySet(Field::SerialNumber));
        }
        let serial_number = CertificateSerialNumber::new(value)?;
        Ok(Self {
            serial_number: Some(serial_number),
            ..self.clone()
        })
    }

    /// Set the revocation date.
    ///
    /// Naive datetimes are taken as UTC. The instant must not precede
    /// 1950-01-01T00:00:00Z, and may only be set once.
    pub fn revocation_date(&self, value: impl AsUtc) -> Result<Self> {
        if self.revocation_date.is_some() {
            return Err(Error::AlreadySet(Field::RevocationDate));
        }
        let revocation_date = time::normalize("revocation date", &value)?;
        Ok(Self {
            revocation_date: Some(revocation_date),
            ..self.clone()
        })
    }

    /// Append a CRL entry extension.
    pub fn add_extension(&self, value: impl Into<ExtensionValue>, critical: bool) -> Result<Self> {
        let value = value.into();
        Context::CrlEntry.check(&value)?;
        let mut extensions = self.extensions.clone();
        extensions.add(value, critical)?;
        Ok(Self {
            extensions,
            ..self.clone()
        })
    }

    pub fn pending_serial_number(&self) -> Option<&CertificateSerialNumber> {
        self.serial_number.as_ref()
    }

    pub fn pending_revocation_date(&self) -> Option<DateTime<Utc>> {
        self.revocation_date
    }

    pub fn pending_extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Freeze the builder into a [`RevokedCertificate`].
    pub fn build(&self) -> Result<RevokedCertificate> {
        let serial_number = self.serial_number.clone().ok_or(Error::MissingField {
            context: "revoked certificate",
            field: Field::SerialNumber,
        })?;
        let revocation_date = self.revocation_date.ok_or(Error::MissingField {
            context: "revoked certificate",
            field: Field::RevocationDate,
        })?;

        tracing::debug!(
            serial_number = %serial_number.format_hex(),
            %revocation_date,
            extensions = self.extensions.len(),
            "built revoked certificate"
        );

        Ok(RevokedCertificate {
            serial_number,
            revocation_date,
            extensions: self.extensions.clone(),
        })
    }

    /// Same as [`build`](Self::build). A CRL entry needs nothing from the
    /// backend until the CRL that holds it is signed.
    pub fn build_with_backend<B: Backend + ?Sized>(&self, _backend: &B) -> Result<RevokedCertificate> {
        self.build()
    }
}

/// An entry of a certificate revocation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevokedCertificate {
    serial_number: CertificateSerialNumber,
    revocation_date: DateTime<Utc>,
    extensions: Extensions,
}

impl RevokedCertificate {
    pub fn serial_number(&self) -> &CertificateSerialNumber {
        &self.serial_number
    }

    pub fn revocation_date_utc(&self) -> DateTime<Utc> {
        self.revocation_date
    }

    /// The revocation date as a naive UTC datetime.
    #[deprecated(since = "0.1.0", note = "use `revocation_date_utc` instead")]
    pub fn revocation_date(&self) -> NaiveDateTime {
        deprecation::emit(Deprecation {
            item: "RevokedCertificate::revocation_date",
            replacement: "RevokedCertificate::revocation_date_utc",
            since: "0.1.0",
        });
        self.revocation_date.naive_utc()
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
