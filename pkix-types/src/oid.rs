//! Object Identifier
//!
//! ```asn1
//! OBJECT IDENTIFIER ::= sequence of arcs, e.g. 2.5.29.21
//! ```
//!
//! Only the dotted form is handled here. Encoding the arcs to DER is the
//! backend's job.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl ObjectIdentifier {
    /// Arcs of the identifier, first arc first.
    pub fn arcs(&self) -> &[u64] {
        &self.inner
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self.inner.first() {
            Some(n) => self.inner[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::ObjectIdentifierEmpty);
        }
        let inner = s
            .split('.')
            .map(|arc| {
                arc.parse::<u64>()
                    .map_err(|_| Error::ObjectIdentifierInvalidComponent(arc.to_string()))
            })
            .collect::<Result<Vec<u64>>>()?;

        if inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents(inner.len()));
        }
        if inner[0] > 2 {
            return Err(Error::ObjectIdentifierInvalidFirstArc(inner[0]));
        }
        Ok(ObjectIdentifier { inner })
    }
}

impl TryFrom<&str> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        *self == other.to_string()
    }
}

impl Serialize for ObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.5.29.21", vec![2, 5, 29, 21])]
    #[case("1.2.840.113549.1.1.11", vec![1, 2, 840, 113549, 1, 1, 11])]
    #[case("0.9.2342.19200300.100.1.25", vec![0, 9, 2342, 19200300, 100, 1, 25])]
    fn test_object_identifier_from_str(#[case] input: &str, #[case] arcs: Vec<u64>) {
        let oid = ObjectIdentifier::from_str(input).unwrap();
        assert_eq!(oid.arcs(), arcs.as_slice());
        assert_eq!(oid.to_string(), input);
        assert_eq!(oid, input);
    }

    #[rstest]
    #[case("", Error::ObjectIdentifierEmpty)]
    #[case("2", Error::ObjectIdentifierTooFewComponents(1))]
    #[case("2.5.x", Error::ObjectIdentifierInvalidComponent("x".to_string()))]
    #[case("2..5", Error::ObjectIdentifierInvalidComponent("".to_string()))]
    #[case("3.1", Error::ObjectIdentifierInvalidFirstArc(3))]
    fn test_object_identifier_from_str_failure(#[case] input: &str, #[case] expected: Error) {
        assert_eq!(ObjectIdentifier::from_str(input).unwrap_err(), expected);
    }

    #[test]
    fn test_object_identifier_serde() {
        let oid = ObjectIdentifier::from_str("2.5.29.24").unwrap();
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(json, r#""2.5.29.24""#);
        let back: ObjectIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, oid);
    }
}
