//! # kuvert-crypto
//!
//! RSA-Schluesselverwaltung und hybrides Verschluesseln+Signieren.
//!
//! ## Module
//! - `keys` - PEM-Laden, PKCS#1 -> PKCS#8 Konvertierung, Schluesselerzeugung
//! - `symmetric` - AES-CBC mit PKCS#7-Padding
//! - `asymmetric` - RSA PKCS#1 v1.5 Verschluesselung (Schluessel einwickeln)
//! - `signature` - SHA256withRSA Signaturen
//! - `envelope` - Kuvert-Protokoll (`seal` / `open`)
//! - `types` - Gemeinsame Typen (Envelope, SymmetricKey, SecretBytes, ...)
//! - `error` - Fehlertypen

pub mod asymmetric;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod signature;
pub mod symmetric;
pub mod types;

#[cfg(test)]
mod test_support;

// Bequeme Re-Exports
pub use error::{CryptoError, CryptoResult};
pub use types::{AesKeySize, Envelope, Opened, SecretBytes, SymmetricKey, IV_LEN};

pub use keys::pem::{
    load_private_key, load_public_key, private_key_from_base64_der, public_key_from_base64_der,
};
pub use keys::pkcs8::pkcs1_to_pkcs8;
pub use keys::{generate_key_pair, KeyPair, PrivateKey, PublicKey};

pub use envelope::{open, seal, seal_with_key_size, EnvelopeB64};
