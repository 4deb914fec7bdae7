//! Gemeinsame Typen fuer das Kryptografie-Subsystem

use crate::error::{CryptoError, CryptoResult};

/// Laenge des Initialisierungsvektors (= AES-Blockgroesse)
pub const IV_LEN: usize = 16;

/// Sicherer Schluessel-Container (wird beim Drop genullt)
#[derive(Clone)]
pub struct SecretBytes(Vec<u8>);

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED] {} bytes)", self.0.len())
    }
}

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// AES-Schluesselgroesse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AesKeySize {
    Aes128,
    Aes192,
    #[default]
    Aes256,
}

impl AesKeySize {
    /// Waehlt die Groesse anhand der Bit-Zahl (128, 192 oder 256)
    pub fn from_bits(bits: u32) -> CryptoResult<Self> {
        match bits {
            128 => Ok(Self::Aes128),
            192 => Ok(Self::Aes192),
            256 => Ok(Self::Aes256),
            other => Err(CryptoError::Cipher(format!(
                "AES-Schluesselgroesse {other} Bit nicht unterstuetzt (128/192/256)"
            ))),
        }
    }

    /// Waehlt die Groesse anhand der Schluessellaenge in Bytes
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        self.key_len() as u32 * 8
    }

    /// Schluessellaenge in Bytes
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

/// Symmetrischer AES-Schluessel (16, 24 oder 32 Bytes)
#[derive(Debug, Clone)]
pub struct SymmetricKey {
    size: AesKeySize,
    bytes: SecretBytes,
}

impl SymmetricKey {
    /// Uebernimmt rohe Schluessel-Bytes, z.B. nach dem Auspacken aus `wrapped_key`
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let size = AesKeySize::from_len(bytes.len()).ok_or_else(|| {
            CryptoError::Cipher(format!(
                "Ungueltige AES-Schluessellaenge: {} Bytes (erwartet 16, 24 oder 32)",
                bytes.len()
            ))
        })?;
        Ok(Self {
            size,
            bytes: SecretBytes::new(bytes.to_vec()),
        })
    }

    pub(crate) fn from_secret(size: AesKeySize, bytes: SecretBytes) -> Self {
        debug_assert_eq!(bytes.len(), size.key_len());
        Self { size, bytes }
    }

    pub fn size(&self) -> AesKeySize {
        self.size
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }
}

/// Ergebnis einer Nachrichtenuebertragung: vier unabhaengige Byte-Puffer
///
/// Wird einmal pro Nachricht von `seal` erzeugt und danach nicht mehr veraendert.
/// Wie die Felder transportiert werden, entscheidet der Aufrufer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    wrapped_key: Vec<u8>,
    iv: [u8; IV_LEN],
    ciphertext: Vec<u8>,
    signature: Vec<u8>,
}

impl Envelope {
    pub(crate) fn new(
        wrapped_key: Vec<u8>,
        iv: [u8; IV_LEN],
        ciphertext: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            wrapped_key,
            iv,
            ciphertext,
            signature,
        }
    }

    /// Setzt einen Umschlag aus empfangenen Feldern zusammen
    pub fn from_parts(
        wrapped_key: Vec<u8>,
        iv: &[u8],
        ciphertext: Vec<u8>,
        signature: Vec<u8>,
    ) -> CryptoResult<Self> {
        let iv: [u8; IV_LEN] = iv.try_into().map_err(|_| {
            CryptoError::Cipher(format!(
                "Ungueltige IV-Laenge: erwartet {IV_LEN}, erhalten {}",
                iv.len()
            ))
        })?;
        Ok(Self::new(wrapped_key, iv, ciphertext, signature))
    }

    /// Zerlegt den Umschlag in (wrapped_key, iv, ciphertext, signature)
    pub fn into_parts(self) -> (Vec<u8>, [u8; IV_LEN], Vec<u8>, Vec<u8>) {
        (self.wrapped_key, self.iv, self.ciphertext, self.signature)
    }

    /// AES-Schluessel, verschluesselt mit dem oeffentlichen Schluessel des Empfaengers
    pub fn wrapped_key(&self) -> &[u8] {
        &self.wrapped_key
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// SHA256withRSA-Signatur ueber SHA-256(ciphertext)
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

/// Ergebnis von `open`
///
/// Ist `authentic` false, muss `message` verworfen werden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opened {
    pub message: Vec<u8>,
    pub authentic: bool,
}

impl Opened {
    pub fn is_authentic(&self) -> bool {
        self.authentic
    }

    /// Gibt die Nachricht nur zurueck wenn die Signatur gueltig war
    pub fn authenticated(self) -> Option<Vec<u8>> {
        self.authentic.then_some(self.message)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aes_groesse_aus_bits() {
        assert_eq!(AesKeySize::from_bits(128).unwrap(), AesKeySize::Aes128);
        assert_eq!(AesKeySize::from_bits(192).unwrap(), AesKeySize::Aes192);
        assert_eq!(AesKeySize::from_bits(256).unwrap(), AesKeySize::Aes256);
        assert!(matches!(
            AesKeySize::from_bits(512),
            Err(CryptoError::Cipher(_))
        ));
        assert_eq!(AesKeySize::default().bits(), 256);
    }

    #[test]
    fn symmetrischer_schluessel_laengen() {
        assert_eq!(
            SymmetricKey::from_bytes(&[1u8; 24]).unwrap().size(),
            AesKeySize::Aes192
        );
        assert!(SymmetricKey::from_bytes(&[1u8; 31]).is_err());
        assert!(SymmetricKey::from_bytes(&[]).is_err());
    }

    #[test]
    fn secret_bytes_debug_redacted() {
        let key = SymmetricKey::from_bytes(&[0xAB; 32]).unwrap();
        let dbg = format!("{key:?}");
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("171"));
    }

    #[test]
    fn envelope_aus_teilen() {
        let env = Envelope::from_parts(vec![1, 2], &[7u8; 16], vec![3], vec![4]).unwrap();
        assert_eq!(env.iv(), &[7u8; 16]);
        let (wk, iv, ct, sig) = env.into_parts();
        assert_eq!((wk, iv, ct, sig), (vec![1, 2], [7u8; 16], vec![3], vec![4]));
    }

    #[test]
    fn envelope_falsche_iv_laenge() {
        let result = Envelope::from_parts(vec![], &[0u8; 12], vec![], vec![]);
        assert!(matches!(result, Err(CryptoError::Cipher(_))));
    }

    #[test]
    fn opened_nur_authentisch_herausgeben() {
        let ok = Opened { message: b"hi".to_vec(), authentic: true };
        let bad = Opened { message: b"hi".to_vec(), authentic: false };
        assert_eq!(ok.authenticated(), Some(b"hi".to_vec()));
        assert_eq!(bad.authenticated(), None);
    }
}
