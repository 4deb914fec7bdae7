//! Digitale Signaturen: SHA256withRSA (RSASSA-PKCS1-v1_5)
//!
//! `sign` hasht die Nachricht selbst mit SHA-256 und signiert den Digest.
//! PKCS#1-v1.5-Signaturen sind deterministisch: gleicher Schluessel und
//! gleiche Nachricht ergeben dieselbe Signatur.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};
use crate::keys::pem::{load_private_key, load_public_key};
use crate::keys::{PrivateKey, PublicKey};

/// Signiert `message` mit dem privaten Schluessel
pub fn sign(message: &[u8], private_key: &PrivateKey) -> CryptoResult<Vec<u8>> {
    let digest = Sha256::digest(message);
    private_key
        .as_rsa()
        .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
        .map_err(|e| CryptoError::Signing(e.to_string()))
}

/// Prueft eine Signatur
///
/// Eine ungueltige Signatur ist ein Ergebnis (`Ok(false)`), kein Fehler.
/// Nur strukturell unbrauchbare Eingaben (falsche Signaturlaenge) liefern
/// [`CryptoError::VerificationSetup`].
pub fn verify(message: &[u8], signature: &[u8], public_key: &PublicKey) -> CryptoResult<bool> {
    if signature.len() != public_key.size() {
        return Err(CryptoError::VerificationSetup(format!(
            "Ungueltige Signaturlaenge: erwartet {}, erhalten {}",
            public_key.size(),
            signature.len()
        )));
    }

    let digest = Sha256::digest(message);
    let valid = public_key
        .as_rsa()
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
        .is_ok();
    Ok(valid)
}

/// Signiert einen Text mit einem PKCS#1-PEM-Schluessel und liefert die Signatur als Base64
pub fn sign_pem_base64(private_key_pem: &str, message: &str) -> CryptoResult<String> {
    let private_key = load_private_key(private_key_pem)?;
    let signature = sign(message.as_bytes(), &private_key)?;
    Ok(STANDARD.encode(signature))
}

/// Prueft eine Base64-Signatur ueber einen Text mit einem SPKI-PEM-Schluessel
pub fn verify_pem_base64(
    public_key_pem: &str,
    signature_b64: &str,
    message: &str,
) -> CryptoResult<bool> {
    let public_key = load_public_key(public_key_pem)?;
    let signature = STANDARD.decode(signature_b64.trim()).map_err(|e| {
        CryptoError::VerificationSetup(format!("Signatur ist kein gueltiges Base64: {e}"))
    })?;
    verify(message.as_bytes(), &signature, &public_key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
