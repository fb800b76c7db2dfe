//! Capability table
//!
//! Each optional feature of the native cryptographic library is reported
//! by the backend build as a boolean flag. The symbols listed for a
//! capability only exist when that flag is set, so the binding layer
//! must not reference them otherwise.
//!
//! The table is `'static` data and is never mutated.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Named optional capability of the native backend.
///
/// Variants are declared in table order; [`Capability::ALL`] iterates them
/// in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    SetCertCb,
    SslSt,
    TlsSt,
    EvpPkeyDhx,
    MemFunctions,
    X509StoreCtxGetIssuer,
    Ed448,
    Ed25519,
    Sigalgs,
    Psk,
    PskTlsV13,
    CustomExt,
    TlsV13Functions,
    Engine,
    VerifiedChain,
    Srtp,
    Providers,
    OpNoRenegotiation,
    DtlsGetDataMtu,
    Fips300,
    SslCookie,
    Pkcs7Funcs,
    PrimeChecks,
    EvpCipher300,
    UnexpectedEofWhileReading,
    Pkcs12SetMac,
    SslOpIgnoreUnexpectedEof,
    GetExtmsSupport,
    EvpAead,
}

impl Capability {
    pub const ALL: [Capability; 29] = [
        Capability::SetCertCb,
        Capability::SslSt,
        Capability::TlsSt,
        Capability::EvpPkeyDhx,
        Capability::MemFunctions,
        Capability::X509StoreCtxGetIssuer,
        Capability::Ed448,
        Capability::Ed25519,
        Capability::Sigalgs,
        Capability::Psk,
        Capability::PskTlsV13,
        Capability::CustomExt,
        Capability::TlsV13Functions,
        Capability::Engine,
        Capability::VerifiedChain,
        Capability::Srtp,
        Capability::Providers,
        Capability::OpNoRenegotiation,
        Capability::DtlsGetDataMtu,
        Capability::Fips300,
        Capability::SslCookie,
        Capability::Pkcs7Funcs,
        Capability::PrimeChecks,
        Capability::EvpCipher300,
        Capability::UnexpectedEofWhileReading,
        Capability::Pkcs12SetMac,
        Capability::SslOpIgnoreUnexpectedEof,
        Capability::GetExtmsSupport,
        Capability::EvpAead,
    ];

    /// Flag name as reported by the backend build.
    pub fn name(self) -> &'static str {
        match self {
            Self::SetCertCb => "Cryptography_HAS_SET_CERT_CB",
            Self::SslSt => "Cryptography_HAS_SSL_ST",
            Self::TlsSt => "Cryptography_HAS_TLS_ST",
            Self::EvpPkeyDhx => "Cryptography_HAS_EVP_PKEY_DHX",
            Self::MemFunctions => "Cryptography_HAS_MEM_FUNCTIONS",
            Self::X509StoreCtxGetIssuer => "Cryptography_HAS_X509_STORE_CTX_GET_ISSUER",
            Self::Ed448 => "Cryptography_HAS_ED448",
            Self::Ed25519 => "Cryptography_HAS_ED25519",
            Self::Sigalgs => "Cryptography_HAS_SIGALGS",
            Self::Psk => "Cryptography_HAS_PSK",
            Self::PskTlsV13 => "Cryptography_HAS_PSK_TLSv1_3",
            Self::CustomExt => "Cryptography_HAS_CUSTOM_EXT",
            Self::TlsV13Functions => "Cryptography_HAS_TLSv1_3_FUNCTIONS",
            Self::Engine => "Cryptography_HAS_ENGINE",
            Self::VerifiedChain => "Cryptography_HAS_VERIFIED_CHAIN",
            Self::Srtp => "Cryptography_HAS_SRTP",
            Self::Providers => "Cryptography_HAS_PROVIDERS",
            Self::OpNoRenegotiation => "Cryptography_HAS_OP_NO_RENEGOTIATION",
            Self::DtlsGetDataMtu => "Cryptography_HAS_DTLS_GET_DATA_MTU",
            Self::Fips300 => "Cryptography_HAS_300_FIPS",
            Self::SslCookie => "Cryptography_HAS_SSL_COOKIE",
            Self::Pkcs7Funcs => "Cryptography_HAS_PKCS7_FUNCS",
            Self::PrimeChecks => "Cryptography_HAS_PRIME_CHECKS",
            Self::EvpCipher300 => "Cryptography_HAS_300_EVP_CIPHER",
            Self::UnexpectedEofWhileReading => "Cryptography_HAS_UNEXPECTED_EOF_WHILE_READING",
            Self::Pkcs12SetMac => "Cryptography_HAS_PKCS12_SET_MAC",
            Self::SslOpIgnoreUnexpectedEof => "Cryptography_HAS_SSL_OP_IGNORE_UNEXPECTED_EOF",
            Self::GetExtmsSupport => "Cryptography_HAS_GET_EXTMS_SUPPORT",
            Self::EvpAead => "Cryptography_HAS_EVP_AEAD",
        }
    }

    /// Native symbols that only exist when this capability is present.
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            Self::SetCertCb => &["SSL_CTX_set_cert_cb", "SSL_set_cert_cb"],
            Self::SslSt => &[
                "SSL_ST_BEFORE",
                "SSL_ST_OK",
                "SSL_ST_INIT",
                "SSL_ST_RENEGOTIATE",
            ],
            Self::TlsSt => &["TLS_ST_BEFORE", "TLS_ST_OK"],
            Self::EvpPkeyDhx => &["EVP_PKEY_DHX"],
            Self::MemFunctions => &["Cryptography_CRYPTO_set_mem_functions"],
            Self::X509StoreCtxGetIssuer => &["X509_STORE_set_get_issuer"],
            Self::Ed448 => &["EVP_PKEY_ED448"],
            Self::Ed25519 => &["EVP_PKEY_ED25519"],
            Self::Sigalgs => &["SSL_CTX_set1_sigalgs_list"],
            Self::Psk => &[
                "SSL_CTX_use_psk_identity_hint",
                "SSL_CTX_set_psk_server_callback",
                "SSL_CTX_set_psk_client_callback",
            ],
            Self::PskTlsV13 => &[
                "SSL_CTX_set_psk_find_session_callback",
                "SSL_CTX_set_psk_use_session_callback",
                "Cryptography_SSL_SESSION_new",
                "SSL_CIPHER_find",
                "SSL_SESSION_set1_master_key",
                "SSL_SESSION_set_cipher",
                "SSL_SESSION_set_protocol_version",
            ],
            Self::CustomExt => &[
                "SSL_CTX_add_client_custom_ext",
                "SSL_CTX_add_server_custom_ext",
                "SSL_extension_supported",
            ],
            Self::TlsV13Functions => &[
                "SSL_VERIFY_POST_HANDSHAKE",
                "SSL_CTX_set_ciphersuites",
                "SSL_verify_client_post_handshake",
                "SSL_CTX_set_post_handshake_auth",
                "SSL_set_post_handshake_auth",
                "SSL_SESSION_get_max_early_data",
                "SSL_write_early_data",
                "SSL_read_early_data",
                "SSL_CTX_set_max_early_data",
            ],
            Self::Engine => &[
                "ENGINE_by_id",
                "ENGINE_init",
                "ENGINE_finish",
                "ENGINE_get_default_RAND",
                "ENGINE_set_default_RAND",
                "ENGINE_unregister_RAND",
                "ENGINE_ctrl_cmd",
                "ENGINE_free",
                "ENGINE_get_name",
                "ENGINE_ctrl_cmd_string",
                "ENGINE_load_builtin_engines",
                "ENGINE_load_private_key",
                "ENGINE_load_public_key",
                "SSL_CTX_set_client_cert_engine",
            ],
            Self::VerifiedChain => &["SSL_get0_verified_chain"],
            Self::Srtp => &[
                "SSL_CTX_set_tlsext_use_srtp",
                "SSL_set_tlsext_use_srtp",
                "SSL_get_selected_srtp_profile",
            ],
            Self::Providers => &[
                "OSSL_PROVIDER_load",
                "OSSL_PROVIDER_unload",
                "ERR_LIB_PROV",
                "PROV_R_WRONG_FINAL_BLOCK_LENGTH",
                "PROV_R_BAD_DECRYPT",
            ],
            Self::OpNoRenegotiation => &["SSL_OP_NO_RENEGOTIATION"],
            Self::DtlsGetDataMtu => &["DTLS_get_data_mtu"],
            Self::Fips300 => &["EVP_default_properties_enable_fips"],
            Self::SslCookie => &[
                "SSL_OP_COOKIE_EXCHANGE",
                "DTLSv1_listen",
                "SSL_CTX_set_cookie_generate_cb",
                "SSL_CTX_set_cookie_verify_cb",
            ],
            Self::Pkcs7Funcs => &["PKCS7_verify", "SMIME_read_PKCS7", "PKCS7_get0_signers"],
            Self::PrimeChecks => &["BN_prime_checks_for_size"],
            Self::EvpCipher300 => &["EVP_CIPHER_fetch", "EVP_CIPHER_free"],
            Self::UnexpectedEofWhileReading => &["SSL_R_UNEXPECTED_EOF_WHILE_READING"],
            Self::Pkcs12SetMac => &["PKCS12_set_mac"],
            Self::SslOpIgnoreUnexpectedEof => &["SSL_OP_IGNORE_UNEXPECTED_EOF"],
            Self::GetExtmsSupport => &["SSL_get_extms_support"],
            Self::EvpAead => &[
                "EVP_aead_chacha20_poly1305",
                "EVP_AEAD_CTX_free",
                "EVP_AEAD_CTX_seal",
                "EVP_AEAD_CTX_open",
                "EVP_AEAD_max_overhead",
                "Cryptography_EVP_AEAD_CTX_new",
            ],
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Capability::ALL
            .into_iter()
            .find(|capability| capability.name() == s)
            .ok_or_else(|| Error::UnknownCapability(s.to_string()))
    }
}

/// Look up the symbols gated behind the capability named `name`.
///
/// # Example
///
/// ```
/// use kumiki_bindings::query;
///
/// let symbols = query("Cryptography_HAS_PSK").unwrap();
/// assert_eq!(symbols[0], "SSL_CTX_use_psk_identity_hint");
/// ```
pub fn query(name: &str) -> Result<&'static [&'static str]> {
    name.parse::<Capability>().map(Capability::symbols)
}

/// Every capability name, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    Capability::ALL.into_iter().map(Capability::name)
}
