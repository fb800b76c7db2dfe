//! # kumiki-bindings
//!
//! Static table of optional backend capabilities and the native symbols
//! gated behind each of them.
//!
//! The binding layer probes a particular backend build once at start-up
//! and uses [`SymbolFilter`] to drop the symbols of every capability the
//! build lacks. Builders in `kumiki-x509` never read the table; they only
//! rely on the [`query`] contract.
//!
//! ```
//! use kumiki_bindings::{Capability, SymbolFilter};
//!
//! let filter = SymbolFilter::from_probe(&|capability: Capability| {
//!     capability != Capability::Engine
//! });
//! assert!(!filter.is_available("ENGINE_by_id"));
//! assert!(filter.is_available("EVP_PKEY_ED25519"));
//! ```

#![forbid(unsafe_code)]

pub mod capability;
pub mod error;
pub mod probe;

pub use capability::{Capability, names, query};
pub use error::{Error, Result};
pub use probe::{CapabilityProbe, SymbolFilter};
