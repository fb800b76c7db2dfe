use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ExtensionValue, StandardExtension};

/*
RFC 5280 Section 5.3.1

id-ce-cRLReasons OBJECT IDENTIFIER ::= { id-ce 21 }

-- reasonCode ::= { CRLReason }

CRLReason ::= ENUMERATED {
     unspecified             (0),
     keyCompromise           (1),
     cACompromise            (2),
     affiliationChanged      (3),
     superseded              (4),
     cessationOfOperation    (5),
     certificateHold         (6),
          -- value 7 is not used
     removeFromCRL           (8),
     privilegeWithdrawn      (9),
     aACompromise           (10) }
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonFlags {
    Unspecified,
    KeyCompromise,
    #[serde(rename = "cACompromise")]
    CaCompromise,
    AffiliationChanged,
    Superseded,
    CessationOfOperation,
    CertificateHold,
    #[serde(rename = "removeFromCRL")]
    RemoveFromCrl,
    PrivilegeWithdrawn,
    #[serde(rename = "aACompromise")]
    AaCompromise,
}

impl ReasonFlags {
    /// ENUMERATED value on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Unspecified => 0,
            Self::KeyCompromise => 1,
            Self::CaCompromise => 2,
            Self::AffiliationChanged => 3,
            Self::Superseded => 4,
            Self::CessationOfOperation => 5,
            Self::CertificateHold => 6,
            Self::RemoveFromCrl => 8,
            Self::PrivilegeWithdrawn => 9,
            Self::AaCompromise => 10,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unspecified),
            1 => Some(Self::KeyCompromise),
            2 => Some(Self::CaCompromise),
            3 => Some(Self::AffiliationChanged),
            4 => Some(Self::Superseded),
            5 => Some(Self::CessationOfOperation),
            6 => Some(Self::CertificateHold),
            8 => Some(Self::RemoveFromCrl),
            9 => Some(Self::PrivilegeWithdrawn),
            10 => Some(Self::AaCompromise),
            _ => None,
        }
    }
}

impl fmt::Display for ReasonFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unspecified => "Unspecified",
            Self::KeyCompromise => "Key Compromise",
            Self::CaCompromise => "CA Compromise",
            Self::AffiliationChanged => "Affiliation Changed",
            Self::Superseded => "Superseded",
            Self::CessationOfOperation => "Cessation Of Operation",
            Self::CertificateHold => "Certificate Hold",
            Self::RemoveFromCrl => "Remove From CRL",
            Self::PrivilegeWithdrawn => "Privilege Withdrawn",
            Self::AaCompromise => "AA Compromise",
        };
        write!(f, "{}", name)
    }
}

/// CRLReason extension
/// OID: 2.5.29.21
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrlReason {
    reason: ReasonFlags,
}

impl CrlReason {
    pub fn new(reason: ReasonFlags) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> ReasonFlags {
        self.reason
    }
}

impl StandardExtension for CrlReason {
    const OID: &'static str = "2.5.29.21";
    const NAME: &'static str = "cRLReason";

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::CrlReason(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<CrlReason> for ExtensionValue {
    fn from(value: CrlReason) -> Self {
        ExtensionValue::CrlReason(value)
    }
}

impl fmt::Display for CrlReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ReasonFlags::Unspecified, 0)]
    #[case(ReasonFlags::KeyCompromise, 1)]
    #[case(ReasonFlags::CaCompromise, 2)]
    #[case(ReasonFlags::CertificateHold, 6)]
    #[case(ReasonFlags::RemoveFromCrl, 8)]
    #[case(ReasonFlags::AaCompromise, 10)]
    fn test_reason_code(#[case] reason: ReasonFlags, #[case] code: u8) {
        assert_eq!(reason.code(), code);
        assert_eq!(ReasonFlags::from_code(code), Some(reason));
    }

    #[rstest]
    #[case(7)]
    #[case(11)]
    #[case(255)]
    fn test_reason_code_unused(#[case] code: u8) {
        assert_eq!(ReasonFlags::from_code(code), None);
    }

    #[rstest]
    #[case(ReasonFlags::CaCompromise, r#""cACompromise""#)]
    #[case(ReasonFlags::RemoveFromCrl, r#""removeFromCRL""#)]
    #[case(ReasonFlags::KeyCompromise, r#""keyCompromise""#)]
    fn test_reason_serialize(#[case] reason: ReasonFlags, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&reason).unwrap(), expected);
    }

    #[test]
    fn test_crl_reason_from_value() {
        let value = ExtensionValue::from(CrlReason::new(ReasonFlags::Superseded));
        assert_eq!(
            CrlReason::from_value(&value).map(CrlReason::reason),
            Some(ReasonFlags::Superseded)
        );
    }
}
