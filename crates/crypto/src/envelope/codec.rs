//! Text-Darstellung eines Kuverts fuer Dateien und Kommandozeile
//!
//! Jedes Feld wird einzeln als Standard-Base64 (mit Padding) kodiert. Das ist
//! keine Wire-Rahmung mit Versionsfeld, nur eine bequeme serde-Form.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, CryptoResult};
use crate::types::{Envelope, IV_LEN};

/// Base64-kodiertes Kuvert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeB64 {
    pub wrapped_key: String,
    pub iv: String,
    pub ciphertext: String,
    pub signature: String,
}

impl From<&Envelope> for EnvelopeB64 {
    fn from(envelope: &Envelope) -> Self {
        Self {
            wrapped_key: STANDARD.encode(envelope.wrapped_key()),
            iv: STANDARD.encode(envelope.iv()),
            ciphertext: STANDARD.encode(envelope.ciphertext()),
            signature: STANDARD.encode(envelope.signature()),
        }
    }
}

impl TryFrom<&EnvelopeB64> for Envelope {
    type Error = CryptoError;

    fn try_from(encoded: &EnvelopeB64) -> CryptoResult<Self> {
        let wrapped_key = decode_field("wrapped_key", &encoded.wrapped_key)?;
        let iv = decode_field("iv", &encoded.iv)?;
        let ciphertext = decode_field("ciphertext", &encoded.ciphertext)?;
        let signature = decode_field("signature", &encoded.signature)?;

        if iv.len() != IV_LEN {
            return Err(CryptoError::Encoding(format!(
                "Feld iv: erwartet {IV_LEN} Bytes, erhalten {}",
                iv.len()
            )));
        }

        Envelope::from_parts(wrapped_key, &iv, ciphertext, signature)
    }
}

impl EnvelopeB64 {
    pub fn to_envelope(&self) -> CryptoResult<Envelope> {
        Envelope::try_from(self)
    }
}

fn decode_field(name: &str, value: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(value.trim())
        .map_err(|e| CryptoError::Encoding(format!("Feld {name}: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn beispiel() -> Envelope {
        Envelope::from_parts(vec![0xAA; 256], &[0x11; 16], vec![0x22; 32], vec![0xBB; 256])
            .unwrap()
    }

    #[test]
    fn felder_sind_standard_base64() {
        let encoded = EnvelopeB64::from(&beispiel());
        assert_eq!(encoded.iv, "EREREREREREREREREREREQ==");
        assert!(encoded.ciphertext.ends_with('='));
    }

    #[test]
    fn json_hin_und_zurueck() {
        let envelope = beispiel();
        let json = serde_json::to_string(&EnvelopeB64::from(&envelope)).unwrap();
        assert!(json.contains("\"wrapped_key\""));

        let parsed: EnvelopeB64 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_envelope().unwrap(), envelope);
    }

    #[test]
    fn ungueltiges_base64_ist_kodierfehler() {
        let mut encoded = EnvelopeB64::from(&beispiel());
        encoded.signature = "kein base64!".to_string();
        assert!(matches!(
            encoded.to_envelope(),
            Err(CryptoError::Encoding(_))
        ));
    }

    #[test]
    fn iv_falscher_laenge_ist_kodierfehler() {
        let mut encoded = EnvelopeB64::from(&beispiel());
        encoded.iv = STANDARD.encode([0u8; 12]);
        assert!(matches!(
            encoded.to_envelope(),
            Err(CryptoError::Encoding(_))
        ));
    }
}
