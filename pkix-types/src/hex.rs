//! Colon-separated hex, as OpenSSL prints serials and key identifiers.

/// Format bytes as colon-separated lowercase hex, e.g. `01:4d`.
pub fn to_colon_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&[0x0a], "0a")]
    #[case(&[0x01, 0x4d], "01:4d")]
    #[case(&[0xde, 0xad, 0xbe, 0xef], "de:ad:be:ef")]
    fn test_to_colon_hex(#[case] bytes: &[u8], #[case] expected: &str) {
        assert_eq!(to_colon_hex(bytes), expected);
    }
}
