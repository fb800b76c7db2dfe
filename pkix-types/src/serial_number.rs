//! Certificate Serial Number
//!
//! Defined in RFC 5280 Section 4.1.2.2
//!
//! ```asn1
//! CertificateSerialNumber ::= INTEGER
//! ```
//!
//! The serial number MUST be a positive integer assigned by the CA to
//! each certificate. Conforming CAs MUST NOT use serial numbers longer
//! than 20 octets. A positive INTEGER of 20 octets keeps its top bit
//! clear, so the value itself must fit in 159 bits.

use std::ops::Deref;

use num_bigint::{BigInt, Sign};
use num_traits::Signed;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::hex::to_colon_hex;

/// Serial numbers must be strictly shorter than this many bits.
pub const MAX_SERIAL_NUMBER_BITS: u64 = 160;

/// Certificate Serial Number
///
/// A validated, strictly positive INTEGER of fewer than 160 bits.
/// Typically displayed in hexadecimal format with colon separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CertificateSerialNumber {
    inner: BigInt,
}

impl CertificateSerialNumber {
    /// Validate `value` as a serial number.
    ///
    /// # Example
    ///
    /// ```
    /// use kumiki_pkix_types::CertificateSerialNumber;
    ///
    /// let serial = CertificateSerialNumber::new(333).unwrap();
    /// assert_eq!(serial.format_hex(), "01:4d");
    /// assert!(CertificateSerialNumber::new(0).is_err());
    /// ```
    pub fn new(value: impl Into<BigInt>) -> Result<Self> {
        let inner = value.into();
        if !inner.is_positive() {
            return Err(Error::SerialNumberNotPositive);
        }
        let bits = inner.bits();
        if bits >= MAX_SERIAL_NUMBER_BITS {
            return Err(Error::SerialNumberTooLarge(bits));
        }
        Ok(Self { inner })
    }

    /// Create from big-endian unsigned magnitude bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use kumiki_pkix_types::CertificateSerialNumber;
    ///
    /// let serial = CertificateSerialNumber::from_bytes(&[0x01, 0x02, 0x03]).unwrap();
    /// assert_eq!(serial.format_hex(), "01:02:03");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Number of significant bits.
    pub fn bit_length(&self) -> u64 {
        self.inner.bits()
    }

    /// Format as hex string with colon separators.
    ///
    /// Returns the lowercase two's-complement encoding, the way OpenSSL
    /// prints it, so a leading `00` appears when the top bit is set.
    pub fn format_hex(&self) -> String {
        to_colon_hex(&self.inner.to_signed_bytes_be())
    }
}

impl From<CertificateSerialNumber> for BigInt {
    fn from(serial: CertificateSerialNumber) -> Self {
        serial.inner
    }
}

impl TryFrom<BigInt> for CertificateSerialNumber {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<BigInt> for CertificateSerialNumber {
    fn as_ref(&self) -> &BigInt {
        &self.inner
    }
}

impl Deref for CertificateSerialNumber {
    type Target = BigInt;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PartialEq<BigInt> for CertificateSerialNumber {
    fn eq(&self, other: &BigInt) -> bool {
        &self.inner == other
    }
}

impl std::fmt::Display for CertificateSerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_hex())
    }
}

impl Serialize for CertificateSerialNumber {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_hex())
    }
}

impl<'de> Deserialize<'de> for CertificateSerialNumber {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = s
            .split(':')
            .map(|b| u8::from_str_radix(b, 16).map_err(serde::de::Error::custom))
            .collect::<std::result::Result<Vec<u8>, D::Error>>()?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rstest::rstest;

    fn pow2(exp: usize) -> BigInt {
        BigInt::one() << exp
    }

    #[rstest]
    #[case::one(BigInt::from(1))]
    #[case::small(BigInt::from(333))]
    #[case::u64_max(BigInt::from(u64::MAX))]
    #[case::largest(pow2(159) - 1)]
    fn test_serial_number_accepts_in_range(#[case] value: BigInt) {
        let serial = CertificateSerialNumber::new(value.clone()).unwrap();
        assert_eq!(serial, value);
        assert!(serial.bit_length() < MAX_SERIAL_NUMBER_BITS);
    }

    #[rstest]
    #[case::zero(BigInt::from(0), Error::SerialNumberNotPositive)]
    #[case::negative(BigInt::from(-1), Error::SerialNumberNotPositive)]
    #[case::large_negative(-pow2(200), Error::SerialNumberNotPositive)]
    #[case::bit_159_set(pow2(159), Error::SerialNumberTooLarge(160))]
    #[case::full_160_bits(pow2(160) - 1, Error::SerialNumberTooLarge(160))]
    #[case::huge(pow2(512), Error::SerialNumberTooLarge(513))]
    fn test_serial_number_rejects_out_of_range(#[case] value: BigInt, #[case] expected: Error) {
        assert_eq!(CertificateSerialNumber::new(value).unwrap_err(), expected);
    }

    #[test]
    fn test_serial_number_from_bytes() {
        let serial = CertificateSerialNumber::from_bytes(&[0x48, 0xc3, 0x54, 0x8e]).unwrap();
        assert_eq!(serial.format_hex(), "48:c3:54:8e");
    }

    #[test]
    fn test_serial_number_format_keeps_sign_octet() {
        let serial = CertificateSerialNumber::new(0x80).unwrap();
        assert_eq!(serial.format_hex(), "00:80");
        assert_eq!(serial.to_string(), "00:80");
    }

    #[test]
    fn test_serial_number_from_bytes_rejects_empty() {
        assert_eq!(
            CertificateSerialNumber::from_bytes(&[]).unwrap_err(),
            Error::SerialNumberNotPositive
        );
    }

    #[test]
    fn test_serial_number_serde() {
        let serial = CertificateSerialNumber::new(0xaabbcc).unwrap();
        let json = serde_json::to_string(&serial).unwrap();
        assert_eq!(json, r#""00:aa:bb:cc""#);
        let back: CertificateSerialNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, serial);
    }
}
