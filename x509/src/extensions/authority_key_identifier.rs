use std::fmt;

use pkix_types::CertificateSerialNumber;
use pkix_types::hex::to_colon_hex;
use serde::{Serialize, Serializer};

use super::general_name::{GeneralName, general_names};
use super::{ExtensionValue, StandardExtension};
use crate::error::{Error, Result};

/*
RFC 5280 Section 4.2.1.1
AuthorityKeyIdentifier ::= SEQUENCE {
    keyIdentifier             [0] KeyIdentifier           OPTIONAL,
    authorityCertIssuer       [1] GeneralNames            OPTIONAL,
    authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL
}

KeyIdentifier ::= OCTET STRING
CertificateSerialNumber ::= INTEGER

authorityCertIssuer and authorityCertSerialNumber MUST both be present
or both be absent.
*/

/// KeyIdentifier is an OCTET STRING used to identify a public key
/// Typically a SHA-1 hash of the SubjectPublicKeyInfo (20 bytes)
pub type KeyIdentifier = Vec<u8>;

/// AuthorityKeyIdentifier extension
/// OID: 2.5.29.35
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityKeyIdentifier {
    key_identifier: Option<KeyIdentifier>,
    authority_cert_issuer: Option<Vec<GeneralName>>,
    authority_cert_serial_number: Option<CertificateSerialNumber>,
}

impl AuthorityKeyIdentifier {
    pub fn new(
        key_identifier: Option<KeyIdentifier>,
        authority_cert_issuer: Option<Vec<GeneralName>>,
        authority_cert_serial_number: Option<CertificateSerialNumber>,
    ) -> Result<Self> {
        if authority_cert_issuer.is_some() != authority_cert_serial_number.is_some() {
            return Err(Error::InvalidExtensionValue {
                extension: Self::NAME,
                reason: "authority cert issuer and serial number must be given together"
                    .to_string(),
            });
        }
        if key_identifier.is_none() && authority_cert_issuer.is_none() {
            return Err(Error::InvalidExtensionValue {
                extension: Self::NAME,
                reason: "a key identifier or an issuer and serial number is required".to_string(),
            });
        }
        if key_identifier.as_ref().is_some_and(Vec::is_empty) {
            return Err(Error::InvalidExtensionValue {
                extension: Self::NAME,
                reason: "key identifier must not be empty".to_string(),
            });
        }
        let authority_cert_issuer = authority_cert_issuer
            .map(|names| general_names(Self::NAME, names))
            .transpose()?;

        Ok(Self {
            key_identifier,
            authority_cert_issuer,
            authority_cert_serial_number,
        })
    }

    /// Only the keyIdentifier field.
    pub fn from_key_identifier(key_identifier: impl Into<KeyIdentifier>) -> Result<Self> {
        Self::new(Some(key_identifier.into()), None, None)
    }

    pub fn key_identifier(&self) -> Option<&[u8]> {
        self.key_identifier.as_deref()
    }

    pub fn authority_cert_issuer(&self) -> Option<&[GeneralName]> {
        self.authority_cert_issuer.as_deref()
    }

    pub fn authority_cert_serial_number(&self) -> Option<&CertificateSerialNumber> {
        self.authority_cert_serial_number.as_ref()
    }
}

impl Serialize for AuthorityKeyIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AuthorityKeyIdentifier", 3)?;
        // Serialize key_identifier as hex string
        let key_identifier = self.key_identifier.as_deref().map(to_colon_hex);
        state.serialize_field("key_identifier", &key_identifier)?;
        state.serialize_field("authority_cert_issuer", &self.authority_cert_issuer)?;
        state.serialize_field(
            "authority_cert_serial_number",
            &self.authority_cert_serial_number,
        )?;
        state.end()
    }
}

impl StandardExtension for AuthorityKeyIdentifier {
    const OID: &'static str = "2.5.29.35";
    const NAME: &'static str = "authorityKeyIdentifier";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::AuthorityKeyIdentifier(aki) => Some(aki),
            _ => None,
        }
    }
}

impl From<AuthorityKeyIdentifier> for ExtensionValue {
    fn from(value: AuthorityKeyIdentifier) -> Self {
        ExtensionValue::AuthorityKeyIdentifier(value)
    }
}

impl fmt::Display for AuthorityKeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X509v3 Authority Key Identifier:")?;
        if let Some(key_id) = &self.key_identifier {
            writeln!(f, "    keyid:{}", to_colon_hex(key_id).to_uppercase())?;
        }
        if let Some(issuer) = &self.authority_cert_issuer {
            for name in issuer {
                writeln!(f, "    {}", name)?;
            }
        }
        if let Some(serial) = &self.authority_cert_serial_number {
            writeln!(f, "    serial:{}", serial.format_hex().to_uppercase())?;
        }
        Ok(())
    }
}
