//! Name and related types
//!
//! Defined in RFC 5280 Section 4.1.2.4
//!
//! ```asn1
//! Name ::= CHOICE { -- only one possibility for now --
//!     rdnSequence  RDNSequence
//! }
//!
//! RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
//!
//! RelativeDistinguishedName ::= SET OF AttributeTypeAndValue
//!
//! AttributeTypeAndValue ::= SEQUENCE {
//!     type     AttributeType,
//!     value    AttributeValue
//! }
//! ```
//!
//! Attribute values are kept as strings; the string type chosen on the
//! wire is decided by the backend encoder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::OidName;
use crate::error::{Error, Result};
use crate::oid::ObjectIdentifier;

/// X.509 Distinguished Name
///
/// A Name identifies an entity in an X.509 certificate or CRL issuer
/// field. It consists of a sequence of Relative Distinguished Names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    rdn_sequence: Vec<RelativeDistinguishedName>,
}

impl Name {
    /// Create a new Name with the given RDN sequence
    pub fn new(rdn_sequence: Vec<RelativeDistinguishedName>) -> Self {
        Self { rdn_sequence }
    }

    /// Build a Name with one single-valued RDN per attribute, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use kumiki_pkix_types::{AttributeTypeAndValue, Name};
    ///
    /// let name = Name::from_attributes([
    ///     AttributeTypeAndValue::country("JP").unwrap(),
    ///     AttributeTypeAndValue::common_name("Example CA").unwrap(),
    /// ]);
    /// assert_eq!(name.to_string(), "C=JP, CN=Example CA");
    /// ```
    pub fn from_attributes(attributes: impl IntoIterator<Item = AttributeTypeAndValue>) -> Self {
        Self {
            rdn_sequence: attributes
                .into_iter()
                .map(RelativeDistinguishedName::new_single)
                .collect(),
        }
    }

    pub fn rdn_sequence(&self) -> &[RelativeDistinguishedName] {
        &self.rdn_sequence
    }

    pub fn is_empty(&self) -> bool {
        self.rdn_sequence.is_empty()
    }

    /// Values of every attribute of the given type, in order.
    pub fn values_for(&self, attribute_type: &ObjectIdentifier) -> Vec<&str> {
        self.rdn_sequence
            .iter()
            .flat_map(|rdn| rdn.attributes.iter())
            .filter(|attr| &attr.attribute_type == attribute_type)
            .map(|attr| attr.value_str())
            .collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .rdn_sequence
            .iter()
            .map(|rdn| rdn.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", formatted)
    }
}

/// Relative Distinguished Name (RDN)
///
/// A set of attribute-value pairs that together form one component of a Name.
/// Typically contains a single AttributeTypeAndValue, but can contain multiple
/// for multi-valued RDNs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDistinguishedName {
    attributes: Vec<AttributeTypeAndValue>,
}

impl RelativeDistinguishedName {
    /// Create a new RDN with a single attribute
    pub fn new_single(attribute: AttributeTypeAndValue) -> Self {
        Self {
            attributes: vec![attribute],
        }
    }

    /// Create a multi-valued RDN. A SET OF needs at least one member.
    pub fn new(attributes: Vec<AttributeTypeAndValue>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(Error::NameEmptyRdn);
        }
        Ok(Self { attributes })
    }

    pub fn attributes(&self) -> &[AttributeTypeAndValue] {
        &self.attributes
    }
}

impl fmt::Display for RelativeDistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .attributes
            .iter()
            .map(|attr| attr.to_string())
            .collect::<Vec<_>>()
            .join("+");
        write!(f, "{}", formatted)
    }
}

/// Attribute Type and Value pair
///
/// Represents a single attribute in an X.509 Name, such as CN=example.com
/// or O=Example Organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTypeAndValue {
    attribute_type: ObjectIdentifier,
    attribute_value: String,
}

impl AttributeTypeAndValue {
    /// OID for commonName (CN)
    pub const OID_COMMON_NAME: &'static str = "2.5.4.3";
    /// OID for countryName (C)
    pub const OID_COUNTRY_NAME: &'static str = "2.5.4.6";
    /// OID for localityName (L)
    pub const OID_LOCALITY_NAME: &'static str = "2.5.4.7";
    /// OID for stateOrProvinceName (ST)
    pub const OID_STATE_OR_PROVINCE_NAME: &'static str = "2.5.4.8";
    /// OID for organizationName (O)
    pub const OID_ORGANIZATION_NAME: &'static str = "2.5.4.10";
    /// OID for organizationalUnitName (OU)
    pub const OID_ORGANIZATIONAL_UNIT_NAME: &'static str = "2.5.4.11";
    /// OID for serialNumber
    pub const OID_SERIAL_NUMBER: &'static str = "2.5.4.5";
    /// OID for domainComponent (DC)
    pub const OID_DOMAIN_COMPONENT: &'static str = "0.9.2342.19200300.100.1.25";
    /// OID for emailAddress
    pub const OID_EMAIL_ADDRESS: &'static str = "1.2.840.113549.1.9.1";

    pub fn new(attribute_type: ObjectIdentifier, attribute_value: impl Into<String>) -> Result<Self> {
        let attribute_value = attribute_value.into();
        if attribute_value.is_empty() {
            return Err(Error::NameEmptyAttributeValue(attribute_type.to_string()));
        }
        Ok(Self {
            attribute_type,
            attribute_value,
        })
    }

    fn well_known(oid: &'static str, value: impl Into<String>) -> Result<Self> {
        Self::new(ObjectIdentifier::from_str(oid)?, value)
    }

    pub fn common_name(value: impl Into<String>) -> Result<Self> {
        Self::well_known(Self::OID_COMMON_NAME, value)
    }

    pub fn country(value: impl Into<String>) -> Result<Self> {
        Self::well_known(Self::OID_COUNTRY_NAME, value)
    }

    pub fn organization(value: impl Into<String>) -> Result<Self> {
        Self::well_known(Self::OID_ORGANIZATION_NAME, value)
    }

    pub fn organizational_unit(value: impl Into<String>) -> Result<Self> {
        Self::well_known(Self::OID_ORGANIZATIONAL_UNIT_NAME, value)
    }

    pub fn attribute_type(&self) -> &ObjectIdentifier {
        &self.attribute_type
    }

    /// Get the string value of the attribute
    pub fn value_str(&self) -> &str {
        &self.attribute_value
    }
}

impl OidName for AttributeTypeAndValue {
    fn oid_name(&self) -> Option<&'static str> {
        match self.attribute_type.to_string().as_str() {
            Self::OID_COMMON_NAME => Some("CN"),
            Self::OID_COUNTRY_NAME => Some("C"),
            Self::OID_LOCALITY_NAME => Some("L"),
            Self::OID_STATE_OR_PROVINCE_NAME => Some("ST"),
            Self::OID_ORGANIZATION_NAME => Some("O"),
            Self::OID_ORGANIZATIONAL_UNIT_NAME => Some("OU"),
            Self::OID_SERIAL_NUMBER => Some("serialNumber"),
            Self::OID_DOMAIN_COMPONENT => Some("DC"),
            Self::OID_EMAIL_ADDRESS => Some("emailAddress"),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeTypeAndValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.oid_name() {
            Some(name) => write!(f, "{}={}", name, self.attribute_value),
            None => write!(f, "{}={}", self.attribute_type, self.attribute_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_name_display() {
        let name = Name::from_attributes([
            AttributeTypeAndValue::country("US").unwrap(),
            AttributeTypeAndValue::organization("Example Org").unwrap(),
            AttributeTypeAndValue::common_name("example.com").unwrap(),
        ]);

        assert_eq!(name.to_string(), "C=US, O=Example Org, CN=example.com");
    }

    #[test]
    fn test_multi_valued_rdn_display() {
        let rdn = RelativeDistinguishedName::new(vec![
            AttributeTypeAndValue::organizational_unit("Ops").unwrap(),
            AttributeTypeAndValue::common_name("crl signer").unwrap(),
        ])
        .unwrap();
        let name = Name::new(vec![rdn]);
        assert_eq!(name.to_string(), "OU=Ops+CN=crl signer");
    }

    #[rstest]
    #[case("2.5.4.3", Some("CN"))]
    #[case("2.5.4.6", Some("C"))]
    #[case("2.5.4.10", Some("O"))]
    #[case("2.5.4.11", Some("OU"))]
    #[case("1.2.3.4", None)]
    fn test_oid_name(#[case] oid_str: &str, #[case] expected: Option<&str>) {
        let oid = ObjectIdentifier::from_str(oid_str).unwrap();
        let attr = AttributeTypeAndValue::new(oid, "value").unwrap();
        assert_eq!(attr.oid_name(), expected);
    }

    #[test]
    fn test_unknown_attribute_displays_oid() {
        let oid = ObjectIdentifier::from_str("1.2.3.4").unwrap();
        let name = Name::from_attributes([AttributeTypeAndValue::new(oid, "x").unwrap()]);
        assert_eq!(name.to_string(), "1.2.3.4=x");
    }

    #[test]
    fn test_values_for() {
        let name = Name::from_attributes([
            AttributeTypeAndValue::organizational_unit("a").unwrap(),
            AttributeTypeAndValue::common_name("ca").unwrap(),
            AttributeTypeAndValue::organizational_unit("b").unwrap(),
        ]);
        let ou = ObjectIdentifier::from_str(AttributeTypeAndValue::OID_ORGANIZATIONAL_UNIT_NAME)
            .unwrap();
        assert_eq!(name.values_for(&ou), vec!["a", "b"]);
    }

    #[test]
    fn test_rejects_empty_values() {
        assert_eq!(
            AttributeTypeAndValue::common_name("").unwrap_err(),
            Error::NameEmptyAttributeValue("2.5.4.3".to_string())
        );
        assert_eq!(
            RelativeDistinguishedName::new(vec![]).unwrap_err(),
            Error::NameEmptyRdn
        );
    }
}
