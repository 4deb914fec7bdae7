//! PEM-Parsing fuer RSA-Schluessel
//!
//! Zwischen den Delimiter-Zeilen steht Standard-Base64 (nicht URL-safe);
//! Whitespace inklusive Zeilenumbrueche ist bedeutungslos und wird vor dem
//! Dekodieren entfernt.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use super::pkcs8::pkcs1_to_pkcs8;
use super::{PrivateKey, PublicKey};
use crate::error::{CryptoError, CryptoResult};

/// Label fuer SPKI/X.509 Public Keys
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Label fuer PKCS#1 Private Keys (Legacy-Format)
pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// Laedt einen oeffentlichen Schluessel aus SPKI-PEM
pub fn load_public_key(pem: &str) -> CryptoResult<PublicKey> {
    let der = decode_armor(pem, PUBLIC_KEY_LABEL)?;
    public_key_from_der(&der)
}

/// Laedt einen privaten Schluessel aus PKCS#1-PEM
///
/// Der PKCS#1-Inhalt wird mit [`pkcs1_to_pkcs8`] in PKCS#8 verpackt und
/// dann ueber den generischen PKCS#8-Parser gelesen.
pub fn load_private_key(pem: &str) -> CryptoResult<PrivateKey> {
    let pkcs1_bytes = decode_armor(pem, RSA_PRIVATE_KEY_LABEL)?;
    let pkcs8_bytes = pkcs1_to_pkcs8(&pkcs1_bytes)?;
    private_key_from_pkcs8_der(&pkcs8_bytes)
}

/// Laedt einen oeffentlichen Schluessel aus Base64-kodiertem SPKI-DER (ohne PEM-Rahmen)
pub fn public_key_from_base64_der(b64: &str) -> CryptoResult<PublicKey> {
    let der = STANDARD.decode(strip_whitespace(b64))?;
    public_key_from_der(&der)
}

/// Laedt einen privaten Schluessel aus Base64-kodiertem PKCS#8-DER (ohne PEM-Rahmen)
pub fn private_key_from_base64_der(b64: &str) -> CryptoResult<PrivateKey> {
    let der = STANDARD.decode(strip_whitespace(b64))?;
    private_key_from_pkcs8_der(&der)
}

fn public_key_from_der(der: &[u8]) -> CryptoResult<PublicKey> {
    RsaPublicKey::from_public_key_der(der)
        .map(PublicKey::from_rsa)
        .map_err(|e| CryptoError::KeyFormat(format!("Kein RSA-Public-Key (SPKI): {e}")))
}

fn private_key_from_pkcs8_der(der: &[u8]) -> CryptoResult<PrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der)
        .map(PrivateKey::from_rsa)
        .map_err(|e| CryptoError::KeyFormat(format!("Kein RSA-Private-Key (PKCS#8): {e}")))
}

/// Entfernt die Delimiter-Zeilen und dekodiert den Base64-Inhalt
fn decode_armor(pem: &str, label: &str) -> CryptoResult<Vec<u8>> {
    let begin = format!("-----BEGIN {label}-----");
    let end = format!("-----END {label}-----");

    let start = pem
        .find(&begin)
        .map(|pos| pos + begin.len())
        .ok_or_else(|| CryptoError::KeyFormat(format!("Delimiter '{begin}' fehlt")))?;
    let stop = pem[start..]
        .find(&end)
        .map(|pos| start + pos)
        .ok_or_else(|| CryptoError::KeyFormat(format!("Delimiter '{end}' fehlt")))?;

    let body = strip_whitespace(&pem[start..stop]);
    if body.is_empty() {
        return Err(CryptoError::KeyFormat(format!("Leerer PEM-Block '{label}'")));
    }

    Ok(STANDARD.decode(body)?)
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
