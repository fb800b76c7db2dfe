use std::fmt;

use serde::Serialize;

use super::general_name::{GeneralName, general_names};
use super::{ExtensionValue, StandardExtension};
use crate::error::Result;

/*
RFC 5280 Section 4.2.1.7 / 5.2.2

id-ce-issuerAltName OBJECT IDENTIFIER ::=  { id-ce 18 }

IssuerAltName ::= GeneralNames
*/

/// IssuerAltName extension
/// OID: 2.5.29.18
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuerAltName {
    names: Vec<GeneralName>,
}

impl IssuerAltName {
    pub fn new(names: Vec<GeneralName>) -> Result<Self> {
        Ok(Self {
            names: general_names(Self::NAME, names)?,
        })
    }

    pub fn names(&self) -> &[GeneralName] {
        &self.names
    }
}

impl StandardExtension for IssuerAltName {
    const OID: &'static str = "2.5.29.18";
    const NAME: &'static str = "issuerAltName";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::IssuerAltName(ian) => Some(ian),
            _ => None,
        }
    }
}

impl From<IssuerAltName> for ExtensionValue {
    fn from(value: IssuerAltName) -> Self {
        ExtensionValue::IssuerAltName(value)
    }
}

impl fmt::Display for IssuerAltName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X509v3 Issuer Alternative Name:")?;
        let names: Vec<String> = self.names.iter().map(|n| n.to_string()).collect();
        writeln!(f, "    {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        vec![GeneralName::uri("http://ca.example.com").unwrap()],
        "X509v3 Issuer Alternative Name:\n    URI:http://ca.example.com\n"
    )]
    #[case(
        vec![
            GeneralName::rfc822_name("ca@example.com").unwrap(),
            GeneralName::dns_name("example.com").unwrap(),
        ],
        "X509v3 Issuer Alternative Name:\n    email:ca@example.com, DNS:example.com\n"
    )]
    fn test_issuer_alt_name_display(#[case] names: Vec<GeneralName>, #[case] expected: &str) {
        let ian = IssuerAltName::new(names).unwrap();
        assert_eq!(ian.to_string(), expected);
    }

    #[test]
    fn test_issuer_alt_name_empty() {
        assert!(IssuerAltName::new(vec![]).is_err());
    }
}
