//! RSA-Verschluesselung (PKCS#1 v1.5) zum Einwickeln symmetrischer Schluessel
//!
//! Nur fuer kurze Eingaben gedacht (AES-Schluessel, hoechstens 32 Bytes),
//! nie fuer Nutzdaten.
//!
//! ## Kapazitaet
//! ```text
//! max_plaintext = modulus_bytes - 11
//! ciphertext    = modulus_bytes
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::Pkcs1v15Encrypt;

use crate::error::{CryptoError, CryptoResult};
use crate::keys::{PrivateKey, PublicKey};

/// Padding-Overhead von RSAES-PKCS1-v1_5
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// Maximale Klartextlaenge fuer den gegebenen Schluessel
pub fn max_plaintext_len(public_key: &PublicKey) -> usize {
    public_key.size().saturating_sub(PKCS1_V15_OVERHEAD)
}

/// Verschluesselt `plaintext` mit dem oeffentlichen Schluessel
pub fn encrypt(plaintext: &[u8], public_key: &PublicKey) -> CryptoResult<Vec<u8>> {
    let max = max_plaintext_len(public_key);
    if plaintext.len() > max {
        return Err(CryptoError::MessageTooLong {
            max,
            actual: plaintext.len(),
        });
    }

    public_key
        .as_rsa()
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))
}

/// Entschluesselt einen RSA-Ciphertext mit dem privaten Schluessel
pub fn decrypt(ciphertext: &[u8], private_key: &PrivateKey) -> CryptoResult<Vec<u8>> {
    if ciphertext.len() != private_key.size() {
        return Err(CryptoError::Decryption(format!(
            "Ungueltige Ciphertext-Laenge: erwartet {}, erhalten {}",
            private_key.size(),
            ciphertext.len()
        )));
    }

    private_key
        .as_rsa()
        .decrypt(Pkcs1v15Encrypt, ciphertext)
        .map_err(|e| CryptoError::Decryption(e.to_string()))
}

/// Verschluesselt einen UTF-8-Text und liefert den Ciphertext als Base64
pub fn encrypt_to_base64(text: &str, public_key: &PublicKey) -> CryptoResult<String> {
    let ciphertext = encrypt(text.as_bytes(), public_key)?;
    Ok(STANDARD.encode(ciphertext))
}

/// Gegenstueck zu [`encrypt_to_base64`]
pub fn decrypt_from_base64(b64: &str, private_key: &PrivateKey) -> CryptoResult<String> {
    let ciphertext = STANDARD
        .decode(b64.trim())
        .map_err(|e| CryptoError::Decryption(format!("Base64-Dekodierung fehlgeschlagen: {e}")))?;
    let plaintext = decrypt(&ciphertext, private_key)?;
    String::from_utf8(plaintext)
        .map_err(|_| CryptoError::Decryption("Klartext ist kein gueltiges UTF-8".to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
