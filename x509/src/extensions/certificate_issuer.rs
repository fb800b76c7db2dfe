use std::fmt;

use serde::Serialize;

use super::general_name::{GeneralName, general_names};
use super::{ExtensionValue, StandardExtension};
use crate::error::Result;

/*
RFC 5280 Section 5.3.3

id-ce-certificateIssuer OBJECT IDENTIFIER ::= { id-ce 29 }

CertificateIssuer ::= GeneralNames
*/

/// CertificateIssuer extension
/// OID: 2.5.29.29
///
/// Identifies the issuer of the certificate in an indirect CRL entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateIssuer {
    names: Vec<GeneralName>,
}

impl CertificateIssuer {
    pub fn new(names: Vec<GeneralName>) -> Result<Self> {
        Ok(Self {
            names: general_names(Self::NAME, names)?,
        })
    }

    pub fn names(&self) -> &[GeneralName] {
        &self.names
    }
}

impl StandardExtension for CertificateIssuer {
    const OID: &'static str = "2.5.29.29";
    const NAME: &'static str = "certificateIssuer";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::CertificateIssuer(issuer) => Some(issuer),
            _ => None,
        }
    }
}

impl From<CertificateIssuer> for ExtensionValue {
    fn from(value: CertificateIssuer) -> Self {
        ExtensionValue::CertificateIssuer(value)
    }
}

impl fmt::Display for CertificateIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.names.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_certificate_issuer() {
        let issuer = CertificateIssuer::new(vec![
            GeneralName::dns_name("ca.example.com").unwrap(),
            GeneralName::IpAddress("2001:db8::1".parse().unwrap()),
        ])
        .unwrap();
        assert_eq!(issuer.names().len(), 2);
        assert_eq!(
            issuer.to_string(),
            "DNS:ca.example.com, IP Address:2001:db8::1"
        );
    }

    #[test]
    fn test_certificate_issuer_requires_a_name() {
        let err = CertificateIssuer::new(vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
