//! Fehlertypen fuer das Kryptografie-Subsystem

use thiserror::Error;

/// Fehler im Kryptografie-Subsystem
///
/// Eine ungueltige Signatur ist kein Fehler: `verify` liefert dafuer `Ok(false)`.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Ungueltiges Schluesselformat: {0}")]
    KeyFormat(String),

    #[error("Nicht unterstuetzte RSA-Schluesselgroesse: {bits} Bit (erlaubt: 2048 bis 4096)")]
    UnsupportedKeySize { bits: usize },

    #[error("Nachricht zu lang fuer RSA: maximal {max} Bytes, erhalten {actual}")]
    MessageTooLong { max: usize, actual: usize },

    #[error("Symmetrische Verschluesselung fehlgeschlagen: {0}")]
    Cipher(String),

    #[error("RSA-Verschluesselung fehlgeschlagen: {0}")]
    Encryption(String),

    // Keine Details zum fehlerhaften Padding-Byte
    #[error("Entschluesselung fehlgeschlagen: ungueltiges Padding")]
    Padding,

    #[error("RSA-Entschluesselung fehlgeschlagen: {0}")]
    Decryption(String),

    #[error("Signatur-Verifikation nicht moeglich: {0}")]
    VerificationSetup(String),

    #[error("Signierung fehlgeschlagen: {0}")]
    Signing(String),

    #[error("Schluessel-Generierung fehlgeschlagen: {0}")]
    KeyGeneration(String),

    #[error("Kodierung fehlgeschlagen: {0}")]
    Encoding(String),
}

impl CryptoError {
    /// Gibt true zurueck wenn der Fehler auf manipulierte oder fremde Daten hindeutet
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::Padding | Self::Decryption(_))
    }
}

impl From<base64::DecodeError> for CryptoError {
    fn from(e: base64::DecodeError) -> Self {
        Self::KeyFormat(format!("Base64-Dekodierung fehlgeschlagen: {e}"))
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehler_anzeige() {
        let e = CryptoError::MessageTooLong { max: 245, actual: 246 };
        assert_eq!(
            e.to_string(),
            "Nachricht zu lang fuer RSA: maximal 245 Bytes, erhalten 246"
        );
    }

    #[test]
    fn integritaetsfehler_erkennung() {
        assert!(CryptoError::Padding.is_integrity_failure());
        assert!(CryptoError::Decryption("x".into()).is_integrity_failure());
        assert!(!CryptoError::KeyFormat("x".into()).is_integrity_failure());
        assert!(!CryptoError::UnsupportedKeySize { bits: 1024 }.is_integrity_failure());
    }

    #[test]
    fn base64_fehler_wird_schluesselformat() {
        use base64::Engine;
        let err = base64::engine::general_purpose::STANDARD
            .decode("###")
            .unwrap_err();
        assert!(matches!(CryptoError::from(err), CryptoError::KeyFormat(_)));
    }
}
