use pkix_types::ObjectIdentifier;
use serde::Serialize;

use super::{ExtensionValue, serialize_hex, typed_name};
use crate::error::{Error, Result};

/// An extension the builders have no type for, carried as its OID and
/// the DER encoding of its value.
///
/// OIDs that have a typed extension are rejected, so every entry of an
/// [`Extensions`](super::Extensions) found by OID is also found by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnrecognizedExtension {
    oid: ObjectIdentifier,
    #[serde(serialize_with = "serialize_hex")]
    value: Vec<u8>,
}

impl UnrecognizedExtension {
    pub fn new(oid: ObjectIdentifier, value: impl Into<Vec<u8>>) -> Result<Self> {
        if let Some(name) = typed_name(&oid.to_string()) {
            return Err(Error::InvalidExtensionValue {
                extension: "unrecognized",
                reason: format!("{oid} is {name}, use the typed extension"),
            });
        }
        Ok(Self {
            oid,
            value: value.into(),
        })
    }

    pub fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl From<UnrecognizedExtension> for ExtensionValue {
    fn from(value: UnrecognizedExtension) -> Self {
        ExtensionValue::Unrecognized(value)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn test_unrecognized_serialize() {
        let ext = UnrecognizedExtension::new(
            ObjectIdentifier::from_str("1.3.6.1.4.1.11129.2.4.2").unwrap(),
            vec![0x04, 0x02, 0xab, 0xcd],
        )
        .unwrap();
        assert_eq!(ext.value(), &[0x04, 0x02, 0xab, 0xcd]);
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            serde_json::json!({ "oid": "1.3.6.1.4.1.11129.2.4.2", "value": "04:02:ab:cd" })
        );
    }

    #[rstest]
    #[case("2.5.29.21", "cRLReason")]
    #[case("2.5.29.20", "cRLNumber")]
    #[case("2.5.29.18", "issuerAltName")]
    fn test_typed_oid_rejected(#[case] oid: &str, #[case] name: &str) {
        let oid_value = ObjectIdentifier::from_str(oid).unwrap();
        let err = UnrecognizedExtension::new(oid_value, vec![0x05, 0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(
            err.to_string(),
            format!("invalid unrecognized: {oid} is {name}, use the typed extension")
        );
    }
}
