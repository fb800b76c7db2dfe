use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Serialize, Serializer};

use super::{ExtensionValue, StandardExtension};
use crate::error::{Error, Result};

/*
RFC 5280 Section 5.2.3 / 5.2.4

id-ce-cRLNumber OBJECT IDENTIFIER ::= { id-ce 20 }

CRLNumber ::= INTEGER (0..MAX)

id-ce-deltaCRLIndicator OBJECT IDENTIFIER ::= { id-ce 27 }

BaseCRLNumber ::= CRLNumber

CRL issuers MUST NOT use CRLNumber values longer than 20 octets.
*/

// 20 octets of a non-negative DER INTEGER
const MAX_CRL_NUMBER_BITS: u64 = 160;

fn crl_number(extension: &'static str, value: BigInt) -> Result<BigInt> {
    if value.is_negative() {
        return Err(Error::InvalidExtensionValue {
            extension,
            reason: format!("must not be negative: {}", value),
        });
    }
    if value.bits() >= MAX_CRL_NUMBER_BITS {
        return Err(Error::InvalidExtensionValue {
            extension,
            reason: format!("must fit in 20 octets, got {} bits", value.bits()),
        });
    }
    Ok(value)
}

fn serialize_decimal<S>(value: &BigInt, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/// CRLNumber extension
/// OID: 2.5.29.20
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CrlNumber {
    #[serde(serialize_with = "serialize_decimal")]
    crl_number: BigInt,
}

impl CrlNumber {
    pub fn new(value: impl Into<BigInt>) -> Result<Self> {
        Ok(Self {
            crl_number: crl_number(Self::NAME, value.into())?,
        })
    }

    pub fn crl_number(&self) -> &BigInt {
        &self.crl_number
    }
}

impl StandardExtension for CrlNumber {
    const OID: &'static str = "2.5.29.20";
    const NAME: &'static str = "cRLNumber";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::CrlNumber(number) => Some(number),
            _ => None,
        }
    }
}

impl From<CrlNumber> for ExtensionValue {
    fn from(value: CrlNumber) -> Self {
        ExtensionValue::CrlNumber(value)
    }
}

/// DeltaCRLIndicator extension
/// OID: 2.5.29.27
///
/// Marks a delta CRL and names the complete CRL it updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeltaCrlIndicator {
    #[serde(serialize_with = "serialize_decimal")]
    base_crl_number: BigInt,
}

impl DeltaCrlIndicator {
    pub fn new(base_crl_number: impl Into<BigInt>) -> Result<Self> {
        Ok(Self {
            base_crl_number: crl_number(Self::NAME, base_crl_number.into())?,
        })
    }

    pub fn base_crl_number(&self) -> &BigInt {
        &self.base_crl_number
    }
}

impl StandardExtension for DeltaCrlIndicator {
    const OID: &'static str = "2.5.29.27";
    const NAME: &'static str = "deltaCRLIndicator";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::DeltaCrlIndicator(delta) => Some(delta),
            _ => None,
        }
    }
}

impl From<DeltaCrlIndicator> for ExtensionValue {
    fn from(value: DeltaCrlIndicator) -> Self {
        ExtensionValue::DeltaCrlIndicator(value)
    }
}
