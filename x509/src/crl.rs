//! Certificate revocation lists
//!
//! [`CertificateRevocationListBuilder`] gathers the issuer, the update
//! window, CRL extensions and [`RevokedCertificate`] entries, then hands
//! a frozen [`TbsCertList`] to a [`Backend`] for encoding and signing.

use chrono::{DateTime, Utc};
use pkix_types::Name;
use serde::Serialize;

use crate::backend::{Backend, HashAlgorithm};
use crate::error::{Error, Field, Result};
use crate::extensions::{Context, ExtensionValue, Extensions};
use crate::revoked::RevokedCertificate;
use crate::time::{self, AsUtc};

/*
RFC 5280 Section 5.1
TBSCertList  ::=  SEQUENCE  {
     version                 Version OPTIONAL,
                                  -- if present, MUST be v2
     signature               AlgorithmIdentifier,
     issuer                  Name,
     thisUpdate              Time,
     nextUpdate              Time OPTIONAL,
     revokedCertificates     SEQUENCE OF SEQUENCE  { ... }  OPTIONAL,
     crlExtensions           [0]  EXPLICIT Extensions OPTIONAL
                                  -- if present, version MUST be v2
                          }
*/

/// The to-be-signed body of a CRL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TbsCertList {
    issuer: Name,
    this_update: DateTime<Utc>,
    next_update: DateTime<Utc>,
    revoked_certificates: Vec<RevokedCertificate>,
    crl_extensions: Extensions,
}

impl TbsCertList {
    pub fn issuer(&self) -> &Name {
        &self.issuer
    }

    /// thisUpdate
    pub fn last_update(&self) -> DateTime<Utc> {
        self.this_update
    }

    pub fn next_update(&self) -> DateTime<Utc> {
        self.next_update
    }

    pub fn revoked_certificates(&self) -> &[RevokedCertificate] {
        &self.revoked_certificates
    }

    pub fn extensions(&self) -> &Extensions {
        &self.crl_extensions
    }
}

/// Builder for a signed CRL.
///
/// Setters borrow `self` and return an updated copy, like
/// [`RevokedCertificateBuilder`](crate::RevokedCertificateBuilder).
#[derive(Debug, Clone, Default)]
pub struct CertificateRevocationListBuilder {
    issuer_name: Option<Name>,
    last_update: Option<DateTime<Utc>>,
    next_update: Option<DateTime<Utc>>,
    extensions: Extensions,
    revoked_certificates: Vec<RevokedCertificate>,
}

impl CertificateRevocationListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issuer_name(&self, name: Name) -> Result<Self> {
        if self.issuer_name.is_some() {
            return Err(Error::AlreadySet(Field::IssuerName));
        }
        Ok(Self {
            issuer_name: Some(name),
            ..self.clone()
        })
    }

    /// Set thisUpdate. Must not be later than the next update.
    pub fn last_update(&self, value: impl AsUtc) -> Result<Self> {
        if self.last_update.is_some() {
            return Err(Error::AlreadySet(Field::LastUpdate));
        }
        let last = time::normalize("last update", &value)?;
        if let Some(next) = self.next_update {
            if next < last {
                return Err(Error::NextUpdateBeforeLastUpdate { last, next });
            }
        }
        Ok(Self {
            last_update: Some(last),
            ..self.clone()
        })
    }

    /// Set nextUpdate. Must not be earlier than the last update.
    pub fn next_update(&self, value: impl AsUtc) -> Result<Self> {
        if self.next_update.is_some() {
            return Err(Error::AlreadySet(Field::NextUpdate));
        }
        let next = time::normalize("next update", &value)?;
        if let Some(last) = self.last_update {
            if next < last {
                return Err(Error::NextUpdateBeforeLastUpdate { last, next });
            }
        }
        Ok(Self {
            next_update: Some(next),
            ..self.clone()
        })
    }

    /// Append a CRL extension.
    pub fn add_extension(&self, value: impl Into<ExtensionValue>, critical: bool) -> Result<Self> {
        let value = value.into();
        Context::Crl.check(&value)?;
        let mut extensions = self.extensions.clone();
        extensions.add(value, critical)?;
        Ok(Self {
            extensions,
            ..self.clone()
        })
    }

    /// Append an entry. Entries keep the order they were added in.
    pub fn add_revoked_certificate(&self, revoked: RevokedCertificate) -> Self {
        let mut builder = self.clone();
        builder.revoked_certificates.push(revoked);
        builder
    }

    pub fn revoked_certificates(&self) -> &[RevokedCertificate] {
        &self.revoked_certificates
    }

    fn tbs_cert_list(&self) -> Result<TbsCertList> {
        let missing = |field| Error::MissingField {
            context: "CRL",
            field,
        };
        let issuer = self
            .issuer_name
            .clone()
            .ok_or_else(|| missing(Field::IssuerName))?;
        let this_update = self.last_update.ok_or_else(|| missing(Field::LastUpdate))?;
        let next_update = self.next_update.ok_or_else(|| missing(Field::NextUpdate))?;

        Ok(TbsCertList {
            issuer,
            this_update,
            next_update,
            revoked_certificates: self.revoked_certificates.clone(),
            crl_extensions: self.extensions.clone(),
        })
    }

    /// Freeze the CRL and have `backend` sign it with `key`.
    pub fn sign<B: Backend + ?Sized>(
        &self,
        backend: &B,
        key: &B::PrivateKey,
        algorithm: Option<HashAlgorithm>,
    ) -> Result<B::Signed> {
        let tbs = self.tbs_cert_list()?;

        tracing::debug!(
            issuer = %tbs.issuer,
            revoked = tbs.revoked_certificates.len(),
            extensions = tbs.crl_extensions.len(),
            algorithm = ?algorithm,
            "signing CRL"
        );

        backend
            .sign_crl(&tbs, key, algorithm)
            .map_err(|e| Error::Backend(Box::new(e)))
    }
}
