//! Conventional names for well-known OIDs

/// Types carrying an OID with a conventional short name, such as `CN`
/// for `2.5.4.3` or `cRLReason` for `2.5.29.21`.
pub trait OidName {
    /// The conventional name, if the OID is well known
    fn oid_name(&self) -> Option<&'static str>;
}
