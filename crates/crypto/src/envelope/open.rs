//! Empfaenger-Seite: Schluessel auspacken, entschluesseln, Signatur pruefen
//!
//! Fehler beim Auspacken des Schluessels werden sofort weitergegeben; ohne
//! Schluessel wird nichts weiter versucht. Ein Padding-Fehler beim
//! Entschluesseln eines nicht authentischen Ciphertexts wird als
//! `authentic == false` gemeldet und ist damit von jeder anderen Manipulation
//! nicht zu unterscheiden.

use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};
use crate::keys::{PrivateKey, PublicKey};
use crate::types::{Envelope, Opened, SecretBytes, SymmetricKey};
use crate::{asymmetric, signature, symmetric};

/// Oeffnet ein Kuvert
///
/// Liefert die Nachricht zusammen mit dem Ergebnis der Signaturpruefung.
/// Bei `authentic == false` muss die Nachricht verworfen werden.
pub fn open(
    envelope: &Envelope,
    receiver_private: &PrivateKey,
    sender_public: &PublicKey,
) -> CryptoResult<Opened> {
    let key = unwrap_key(envelope.wrapped_key(), receiver_private)?;

    let decrypted = symmetric::decrypt(envelope.ciphertext(), &key, envelope.iv());

    // Digest immer lokal berechnen, nie vom Absender uebernehmen
    let digest = Sha256::digest(envelope.ciphertext());
    let authentic = signature::verify(&digest, envelope.signature(), sender_public)?;

    let message = match decrypted {
        Ok(message) => message,
        Err(CryptoError::Padding) if !authentic => Vec::new(),
        Err(e) => return Err(e),
    };

    if authentic {
        tracing::debug!(message_len = message.len(), "Kuvert geoeffnet");
    } else {
        tracing::warn!(
            ciphertext_len = envelope.ciphertext().len(),
            "Kuvert-Signatur ungueltig, Nachricht muss verworfen werden"
        );
    }

    Ok(Opened { message, authentic })
}

/// Packt den AES-Schluessel aus; unbrauchbare Schluessellaengen zaehlen als Auspack-Fehler
fn unwrap_key(wrapped_key: &[u8], receiver_private: &PrivateKey) -> CryptoResult<SymmetricKey> {
    let key_bytes = SecretBytes::new(asymmetric::decrypt(wrapped_key, receiver_private)?);
    SymmetricKey::from_bytes(key_bytes.as_bytes()).map_err(|_| {
        CryptoError::Decryption(format!(
            "Ausgepackter Schluessel hat ungueltige Laenge: {} Bytes",
            key_bytes.len()
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
