use std::borrow::Cow;

use pkix_types::hex::to_colon_hex;
use pkix_types::{ObjectIdentifier, OidName};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

mod authority_key_identifier;
mod certificate_issuer;
mod crl_number;
mod crl_reason;
mod general_name;
mod invalidity_date;
mod issuer_alt_name;
mod unrecognized;

pub use authority_key_identifier::{AuthorityKeyIdentifier, KeyIdentifier};
pub use certificate_issuer::CertificateIssuer;
pub use crl_number::{CrlNumber, DeltaCrlIndicator};
pub use crl_reason::{CrlReason, ReasonFlags};
pub use general_name::GeneralName;
pub use invalidity_date::InvalidityDate;
pub use issuer_alt_name::IssuerAltName;
pub use unrecognized::UnrecognizedExtension;

/// Trait for typed extension values with a fixed OID.
///
/// Used by [`Extensions::get_for_type`] to find and downcast an entry.
pub trait StandardExtension: Sized {
    /// The OID of this extension type as a string (e.g., "2.5.29.21" for CRLReason)
    const OID: &'static str;
    /// Short name as used in RFC 5280.
    const NAME: &'static str;

    /// Borrow `Self` out of an [`ExtensionValue`] if it holds this type.
    fn from_value(value: &ExtensionValue) -> Option<&Self>;
}

/// Every extension value a builder accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum ExtensionValue {
    CrlReason(CrlReason),
    InvalidityDate(InvalidityDate),
    CertificateIssuer(CertificateIssuer),
    CrlNumber(CrlNumber),
    DeltaCrlIndicator(DeltaCrlIndicator),
    AuthorityKeyIdentifier(AuthorityKeyIdentifier),
    IssuerAltName(IssuerAltName),
    Unrecognized(UnrecognizedExtension),
}

impl ExtensionValue {
    /// Dotted OID of the extension. Two values with the same OID are the
    /// same extension type.
    pub fn oid(&self) -> Cow<'static, str> {
        match self {
            Self::CrlReason(_) => Cow::Borrowed(CrlReason::OID),
            Self::InvalidityDate(_) => Cow::Borrowed(InvalidityDate::OID),
            Self::CertificateIssuer(_) => Cow::Borrowed(CertificateIssuer::OID),
            Self::CrlNumber(_) => Cow::Borrowed(CrlNumber::OID),
            Self::DeltaCrlIndicator(_) => Cow::Borrowed(DeltaCrlIndicator::OID),
            Self::AuthorityKeyIdentifier(_) => Cow::Borrowed(AuthorityKeyIdentifier::OID),
            Self::IssuerAltName(_) => Cow::Borrowed(IssuerAltName::OID),
            Self::Unrecognized(ext) => Cow::Owned(ext.oid().to_string()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CrlReason(_) => CrlReason::NAME,
            Self::InvalidityDate(_) => InvalidityDate::NAME,
            Self::CertificateIssuer(_) => CertificateIssuer::NAME,
            Self::CrlNumber(_) => CrlNumber::NAME,
            Self::DeltaCrlIndicator(_) => DeltaCrlIndicator::NAME,
            Self::AuthorityKeyIdentifier(_) => AuthorityKeyIdentifier::NAME,
            Self::IssuerAltName(_) => IssuerAltName::NAME,
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Short name of the typed extension registered for `oid`, if any.
pub(crate) fn typed_name(oid: &str) -> Option<&'static str> {
    const TYPED: [(&str, &str); 7] = [
        (CrlReason::OID, CrlReason::NAME),
        (InvalidityDate::OID, InvalidityDate::NAME),
        (CertificateIssuer::OID, CertificateIssuer::NAME),
        (CrlNumber::OID, CrlNumber::NAME),
        (DeltaCrlIndicator::OID, DeltaCrlIndicator::NAME),
        (AuthorityKeyIdentifier::OID, AuthorityKeyIdentifier::NAME),
        (IssuerAltName::OID, IssuerAltName::NAME),
    ];
    TYPED
        .into_iter()
        .find_map(|(typed, name)| (typed == oid).then_some(name))
}

/// Where an extension is being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    CrlEntry,
    Crl,
}

impl Context {
    fn name(self) -> &'static str {
        match self {
            Self::CrlEntry => "CRL entry",
            Self::Crl => "CRL",
        }
    }

    fn permits(self, value: &ExtensionValue) -> bool {
        use ExtensionValue as V;
        match self {
            Self::CrlEntry => matches!(
                value,
                V::CrlReason(_) | V::InvalidityDate(_) | V::CertificateIssuer(_) | V::Unrecognized(_)
            ),
            Self::Crl => matches!(
                value,
                V::CrlNumber(_)
                    | V::DeltaCrlIndicator(_)
                    | V::AuthorityKeyIdentifier(_)
                    | V::IssuerAltName(_)
                    | V::Unrecognized(_)
            ),
        }
    }

    /// Reject values that are not valid in this context.
    pub(crate) fn check(self, value: &ExtensionValue) -> Result<()> {
        if self.permits(value) {
            Ok(())
        } else {
            Err(Error::UnsupportedExtension {
                extension: value.name(),
                context: self.name(),
            })
        }
    }
}

/*
RFC 5280 Section 4.1
Extension  ::=  SEQUENCE  {
    extnID      OBJECT IDENTIFIER,
    critical    BOOLEAN DEFAULT FALSE,
    extnValue   OCTET STRING
}
*/

/// One entry of an [`Extensions`] container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    critical: bool,
    value: ExtensionValue,
}

impl Extension {
    pub fn new(value: impl Into<ExtensionValue>, critical: bool) -> Self {
        Self {
            critical,
            value: value.into(),
        }
    }

    pub fn oid(&self) -> Cow<'static, str> {
        self.value.oid()
    }

    pub fn critical(&self) -> bool {
        self.critical
    }

    pub fn value(&self) -> &ExtensionValue {
        &self.value
    }
}

impl OidName for Extension {
    fn oid_name(&self) -> Option<&'static str> {
        match self.value {
            ExtensionValue::Unrecognized(_) => None,
            _ => Some(self.value.name()),
        }
    }
}

/// A typed view of an entry returned by [`Extensions::get_for_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedExtension<'a, T> {
    pub oid: &'static str,
    pub critical: bool,
    pub value: &'a T,
}

/*
Extensions  ::=  SEQUENCE SIZE (1..MAX) OF Extension
*/

/// Ordered collection of extensions with at most one entry per OID.
///
/// Insertion order is kept and is the order the entries are encoded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Extensions {
    extensions: Vec<Extension>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extension. Fails if one with the same OID is present.
    pub fn add(&mut self, value: impl Into<ExtensionValue>, critical: bool) -> Result<()> {
        let extension = Extension::new(value, critical);
        let oid = extension.oid();
        if self.extensions.iter().any(|e| e.oid() == oid) {
            return Err(Error::DuplicateExtension(oid.into_owned()));
        }
        self.extensions.push(extension);
        Ok(())
    }

    /// Find the entry holding a `T`.
    pub fn get_for_type<T: StandardExtension>(&self) -> Result<TypedExtension<'_, T>> {
        self.extensions
            .iter()
            .find_map(|e| {
                T::from_value(&e.value).map(|value| TypedExtension {
                    oid: T::OID,
                    critical: e.critical,
                    value,
                })
            })
            .ok_or_else(|| Error::ExtensionNotFound(T::NAME.to_string()))
    }

    /// Find the entry with the given OID.
    pub fn get_for_oid(&self, oid: &ObjectIdentifier) -> Result<&Extension> {
        let oid = oid.to_string();
        self.extensions
            .iter()
            .find(|e| e.oid() == oid.as_str())
            .ok_or(Error::ExtensionNotFound(oid))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Extension> {
        self.extensions.iter()
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = &'a Extension;
    type IntoIter = std::slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Extensions {
    type Item = Extension;
    type IntoIter = std::vec::IntoIter<Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.extensions.into_iter()
    }
}

pub(crate) fn serialize_hex<S>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_colon_hex(bytes))
}
