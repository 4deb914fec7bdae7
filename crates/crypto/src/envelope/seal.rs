//! Sender-Seite: Nachricht verschluesseln, signieren und Schluessel einwickeln

use sha2::{Digest, Sha256};

use crate::error::CryptoResult;
use crate::keys::{PrivateKey, PublicKey};
use crate::types::{AesKeySize, Envelope};
use crate::{asymmetric, signature, symmetric};

/// Versiegelt `message` fuer den Empfaenger (AES-256)
pub fn seal(
    message: &[u8],
    sender_private: &PrivateKey,
    receiver_public: &PublicKey,
) -> CryptoResult<Envelope> {
    seal_with_key_size(message, AesKeySize::Aes256, sender_private, receiver_public)
}

/// Wie [`seal`], mit waehlbarer AES-Schluesselgroesse
pub fn seal_with_key_size(
    message: &[u8],
    key_size: AesKeySize,
    sender_private: &PrivateKey,
    receiver_public: &PublicKey,
) -> CryptoResult<Envelope> {
    // Schluessel und IV sind pro Nachricht neu
    let key = symmetric::generate_key(key_size);
    let iv = symmetric::generate_iv();

    let ciphertext = symmetric::encrypt(message, &key, &iv)?;

    let digest = Sha256::digest(&ciphertext);
    let signature = signature::sign(&digest, sender_private)?;

    let wrapped_key = asymmetric::encrypt(key.as_bytes(), receiver_public)?;

    tracing::debug!(
        message_len = message.len(),
        ciphertext_len = ciphertext.len(),
        aes_bits = key_size.bits(),
        "Kuvert versiegelt"
    );

    Ok(Envelope::new(wrapped_key, iv, ciphertext, signature))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
