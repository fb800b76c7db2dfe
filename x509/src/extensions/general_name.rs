use std::fmt;
use std::net::IpAddr;

use pkix_types::{Name, ObjectIdentifier};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/*
RFC 5280 Section 4.2.1.6
GeneralName ::= CHOICE {
    otherName                 [0] OtherName,
    rfc822Name                [1] IA5String,
    dNSName                   [2] IA5String,
    x400Address               [3] ORAddress,
    directoryName             [4] Name,
    ediPartyName              [5] EDIPartyName,
    uniformResourceIdentifier [6] IA5String,
    iPAddress                 [7] OCTET STRING,
    registeredID              [8] OBJECT IDENTIFIER
}

GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName
*/

/// Name forms a builder can emit. otherName, x400Address and
/// ediPartyName are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGeneralName")]
pub enum GeneralName {
    /// rfc822Name [1] - Email address (IA5String)
    Rfc822Name(String),
    /// dNSName [2] - DNS hostname (IA5String)
    DnsName(String),
    /// directoryName [4] - X.500 Name
    DirectoryName(Name),
    /// uniformResourceIdentifier [6] - URI (IA5String)
    Uri(String),
    /// iPAddress [7] - single IPv4 or IPv6 address
    IpAddress(IpAddr),
    /// registeredID [8] - Registered OBJECT IDENTIFIER
    RegisteredId(ObjectIdentifier),
}

impl GeneralName {
    pub fn rfc822_name(value: impl Into<String>) -> Result<Self> {
        ia5("rfc822Name", value.into()).map(GeneralName::Rfc822Name)
    }

    pub fn dns_name(value: impl Into<String>) -> Result<Self> {
        ia5("dNSName", value.into()).map(GeneralName::DnsName)
    }

    pub fn uri(value: impl Into<String>) -> Result<Self> {
        ia5("uniformResourceIdentifier", value.into()).map(GeneralName::Uri)
    }
}

// Deserialized form, checked by the constructors above.
#[derive(Deserialize)]
enum UncheckedGeneralName {
    Rfc822Name(String),
    DnsName(String),
    DirectoryName(Name),
    Uri(String),
    IpAddress(IpAddr),
    RegisteredId(ObjectIdentifier),
}

impl TryFrom<UncheckedGeneralName> for GeneralName {
    type Error = Error;

    fn try_from(value: UncheckedGeneralName) -> Result<Self> {
        match value {
            UncheckedGeneralName::Rfc822Name(v) => GeneralName::rfc822_name(v),
            UncheckedGeneralName::DnsName(v) => GeneralName::dns_name(v),
            UncheckedGeneralName::Uri(v) => GeneralName::uri(v),
            UncheckedGeneralName::DirectoryName(name) => Ok(GeneralName::DirectoryName(name)),
            UncheckedGeneralName::IpAddress(ip) => Ok(GeneralName::IpAddress(ip)),
            UncheckedGeneralName::RegisteredId(oid) => Ok(GeneralName::RegisteredId(oid)),
        }
    }
}

// IA5String forms must be non-empty ASCII
fn ia5(form: &'static str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(Error::InvalidExtensionValue {
            extension: "GeneralName",
            reason: format!("{} must not be empty", form),
        });
    }
    if !value.is_ascii() {
        return Err(Error::InvalidExtensionValue {
            extension: "GeneralName",
            reason: format!("{} must be valid ASCII: {}", form, value),
        });
    }
    Ok(value)
}

/// Check the GeneralNames SIZE (1..MAX) constraint.
pub(crate) fn general_names(extension: &'static str, names: Vec<GeneralName>) -> Result<Vec<GeneralName>> {
    if names.is_empty() {
        return Err(Error::InvalidExtensionValue {
            extension,
            reason: "at least one GeneralName is required".to_string(),
        });
    }
    Ok(names)
}

impl fmt::Display for GeneralName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneralName::DnsName(dns) => write!(f, "DNS:{}", dns),
            GeneralName::IpAddress(ip) => write!(f, "IP Address:{}", ip),
            GeneralName::Rfc822Name(email) => write!(f, "email:{}", email),
            GeneralName::Uri(uri) => write!(f, "URI:{}", uri),
            GeneralName::DirectoryName(name) => write!(f, "DirName:{}", name),
            GeneralName::RegisteredId(oid) => write!(f, "Registered ID:{}", oid),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use pkix_types::AttributeTypeAndValue;
    use rstest::rstest;

    #[rstest]
    #[case(GeneralName::dns_name("example.com").unwrap(), "DNS:example.com")]
    #[case(GeneralName::rfc822_name("ca@example.com").unwrap(), "email:ca@example.com")]
    #[case(GeneralName::uri("http://crl.example.com/ca.crl").unwrap(), "URI:http://crl.example.com/ca.crl")]
    #[case(GeneralName::IpAddress("192.0.2.1".parse().unwrap()), "IP Address:192.0.2.1")]
    #[case(GeneralName::RegisteredId(ObjectIdentifier::from_str("1.2.3.4").unwrap()), "Registered ID:1.2.3.4")]
    #[case(
        GeneralName::DirectoryName(Name::from_attributes([AttributeTypeAndValue::common_name("CA").unwrap()])),
        "DirName:CN=CA"
    )]
    fn test_general_name_display(#[case] name: GeneralName, #[case] expected: &str) {
        assert_eq!(name.to_string(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::non_ascii("例え.jp")]
    fn test_ia5_forms_reject_bad_input(#[case] value: &str) {
        let err = GeneralName::dns_name(value).unwrap_err();
        assert!(matches!(err, Error::InvalidExtensionValue { extension: "GeneralName", .. }));
    }

    #[rstest]
    #[case::empty_dns(r#"{"DnsName":""}"#)]
    #[case::non_ascii_uri(r#"{"Uri":"http://例え.jp"}"#)]
    #[case::empty_email(r#"{"Rfc822Name":""}"#)]
    fn test_deserialize_validates_ia5(#[case] json: &str) {
        let err = serde_json::from_str::<GeneralName>(json).unwrap_err();
        assert!(err.to_string().contains("invalid GeneralName"), "{err}");
    }

    #[test]
    fn test_deserialize_accepts_valid_names() {
        let name: GeneralName = serde_json::from_str(r#"{"DnsName":"kumiki.example"}"#).unwrap();
        assert_eq!(name, GeneralName::dns_name("kumiki.example").unwrap());
        let name: GeneralName = serde_json::from_str(r#"{"IpAddress":"192.0.2.1"}"#).unwrap();
        assert_eq!(name.to_string(), "IP Address:192.0.2.1");
    }

    #[test]
    fn test_general_names_must_not_be_empty() {
        assert!(general_names("CertificateIssuer", vec![]).is_err());
        assert_eq!(
            general_names("CertificateIssuer", vec![GeneralName::dns_name("a").unwrap()])
                .unwrap()
                .len(),
            1
        );
    }
}
