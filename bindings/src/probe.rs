//! Load-time pruning of unsupported backend symbols
//!
//! The binding layer asks the loaded backend whether each capability
//! flag is set and collects the symbols of every unsupported capability
//! before anything references them.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::capability::Capability;

/// Answers whether the loaded backend build reports a capability flag.
pub trait CapabilityProbe {
    fn is_supported(&self, capability: Capability) -> bool;
}

impl<F> CapabilityProbe for F
where
    F: Fn(Capability) -> bool,
{
    fn is_supported(&self, capability: Capability) -> bool {
        self(capability)
    }
}

/// Flags reported as a set of enabled capability names.
impl CapabilityProbe for HashSet<&str> {
    fn is_supported(&self, capability: Capability) -> bool {
        self.contains(capability.name())
    }
}

impl CapabilityProbe for HashSet<String> {
    fn is_supported(&self, capability: Capability) -> bool {
        self.contains(capability.name())
    }
}

/// Symbols that must not be referenced for a given backend build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolFilter {
    unsupported: BTreeMap<Capability, &'static [&'static str]>,
    excluded: BTreeSet<&'static str>,
}

impl SymbolFilter {
    /// Evaluate every capability in the table against `probe`.
    pub fn from_probe<P: CapabilityProbe + ?Sized>(probe: &P) -> Self {
        let mut filter = SymbolFilter::default();
        for capability in Capability::ALL {
            if probe.is_supported(capability) {
                continue;
            }
            tracing::debug!(
                capability = capability.name(),
                symbols = capability.symbols().len(),
                "backend lacks capability, pruning symbols"
            );
            filter
                .unsupported
                .insert(capability, capability.symbols());
            filter.excluded.extend(capability.symbols().iter().copied());
        }
        filter
    }

    /// Whether `symbol` may be referenced. Symbols outside the table are
    /// unconditional and always available.
    pub fn is_available(&self, symbol: &str) -> bool {
        !self.excluded.contains(symbol)
    }

    pub fn is_supported(&self, capability: Capability) -> bool {
        !self.unsupported.contains_key(&capability)
    }

    /// Unsupported capabilities, in table order.
    pub fn unsupported(&self) -> impl Iterator<Item = Capability> + '_ {
        self.unsupported.keys().copied()
    }

    /// All pruned symbols, sorted.
    pub fn excluded_symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.excluded.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_backend_prunes_nothing() {
        let filter = SymbolFilter::from_probe(&|_: Capability| true);
        assert_eq!(filter.unsupported().count(), 0);
        assert_eq!(filter.excluded_symbols().count(), 0);
        assert!(filter.is_available("SSL_CTX_set_cert_cb"));
    }

    #[test]
    fn test_empty_backend_prunes_everything() {
        let filter = SymbolFilter::from_probe(&|_: Capability| false);
        assert_eq!(filter.unsupported().count(), Capability::ALL.len());
        for capability in Capability::ALL {
            assert!(!filter.is_supported(capability));
            for symbol in capability.symbols() {
                assert!(!filter.is_available(symbol), "{symbol} should be pruned");
            }
        }
    }

    #[rstest]
    #[case(Capability::Psk, "SSL_CTX_set_psk_server_callback")]
    #[case(Capability::Engine, "ENGINE_load_private_key")]
    #[case(Capability::EvpAead, "EVP_AEAD_CTX_seal")]
    fn test_single_missing_capability(#[case] missing: Capability, #[case] symbol: &str) {
        let filter = SymbolFilter::from_probe(&|capability: Capability| capability != missing);
        assert_eq!(filter.unsupported().collect::<Vec<_>>(), vec![missing]);
        assert!(!filter.is_available(symbol));
        assert_eq!(filter.excluded_symbols().count(), missing.symbols().len());
    }

    #[test]
    fn test_probe_from_name_set() {
        let enabled: HashSet<&str> = ["Cryptography_HAS_ED25519", "Cryptography_HAS_ED448"]
            .into_iter()
            .collect();
        let filter = SymbolFilter::from_probe(&enabled);
        assert!(filter.is_supported(Capability::Ed25519));
        assert!(filter.is_supported(Capability::Ed448));
        assert!(!filter.is_supported(Capability::Psk));
        assert!(filter.is_available("EVP_PKEY_ED25519"));
        assert!(!filter.is_available("SSL_CTX_use_psk_identity_hint"));
    }

    #[rstest]
    #[case(Capability::PskTlsV13, "Cryptography_SSL_SESSION_new", "SSL_SESSION_new")]
    #[case(Capability::EvpAead, "Cryptography_EVP_AEAD_CTX_new", "EVP_AEAD_CTX_new")]
    #[case(
        Capability::MemFunctions,
        "Cryptography_CRYPTO_set_mem_functions",
        "CRYPTO_set_mem_functions"
    )]
    fn test_prunes_wrapper_not_native_symbol(
        #[case] missing: Capability,
        #[case] wrapper: &str,
        #[case] native: &str,
    ) {
        let filter = SymbolFilter::from_probe(&|capability: Capability| capability != missing);
        assert!(!filter.is_available(wrapper));
        assert!(filter.is_available(native));
    }

    #[test]
    fn test_symbols_outside_table_are_available() {
        let filter = SymbolFilter::from_probe(&|_: Capability| false);
        assert!(filter.is_available("X509_CRL_new"));
    }
}
