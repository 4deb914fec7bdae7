//! Symmetrische Verschluesselung: AES-CBC mit PKCS#7-Padding
//!
//! Der IV wird vom Aufrufer geliefert und darf mit demselben Schluessel nie
//! wiederverwendet werden. Jeder Aufruf baut einen eigenen Cipher-Kontext auf,
//! der am Ende des Aufrufs verworfen wird.
//!
//! ## Laengen
//! ```text
//! ciphertext = (plaintext / 16 + 1) * 16
//! ```
//! Ein blockbuendiger Plaintext bekommt einen vollen Padding-Block angehaengt.
//!
//! `decrypt` meldet jeden Padding-Fehler als [`CryptoError::Padding`] ohne
//! weitere Details. Ohne Signaturpruefung ist AES-CBC nicht manipulationssicher;
//! Aufrufer sollten Padding-Fehler wie jeden anderen Integritaetsfehler behandeln.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};
use crate::types::{AesKeySize, SecretBytes, SymmetricKey, IV_LEN};

/// Erzeugt einen zufaelligen AES-Schluessel der gewuenschten Groesse
pub fn generate_key(size: AesKeySize) -> SymmetricKey {
    let mut key_bytes = vec![0u8; size.key_len()];
    OsRng.fill_bytes(&mut key_bytes);
    SymmetricKey::from_secret(size, SecretBytes::new(key_bytes))
}

/// Erzeugt einen frischen, zufaelligen IV
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Verschluesselt `plaintext` mit AES-CBC/PKCS#7
pub fn encrypt(plaintext: &[u8], key: &SymmetricKey, iv: &[u8]) -> CryptoResult<Vec<u8>> {
    check_iv(iv)?;
    let key_bytes = key.as_bytes();
    match key.size() {
        AesKeySize::Aes128 => cbc_encrypt::<aes::Aes128>(key_bytes, iv, plaintext),
        AesKeySize::Aes192 => cbc_encrypt::<aes::Aes192>(key_bytes, iv, plaintext),
        AesKeySize::Aes256 => cbc_encrypt::<aes::Aes256>(key_bytes, iv, plaintext),
    }
}

/// Entschluesselt AES-CBC/PKCS#7
pub fn decrypt(ciphertext: &[u8], key: &SymmetricKey, iv: &[u8]) -> CryptoResult<Vec<u8>> {
    check_iv(iv)?;
    let key_bytes = key.as_bytes();
    match key.size() {
        AesKeySize::Aes128 => cbc_decrypt::<aes::Aes128>(key_bytes, iv, ciphertext),
        AesKeySize::Aes192 => cbc_decrypt::<aes::Aes192>(key_bytes, iv, ciphertext),
        AesKeySize::Aes256 => cbc_decrypt::<aes::Aes256>(key_bytes, iv, ciphertext),
    }
}

fn check_iv(iv: &[u8]) -> CryptoResult<()> {
    if iv.len() != IV_LEN {
        return Err(CryptoError::Cipher(format!(
            "Ungueltige IV-Laenge: erwartet {IV_LEN}, erhalten {}",
            iv.len()
        )));
    }
    Ok(())
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> CryptoResult<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher,
    cbc::Encryptor<C>: KeyIvInit + BlockEncryptMut,
{
    let cipher = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| CryptoError::Cipher(format!("AES-Initialisierung fehlgeschlagen: {e}")))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> CryptoResult<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher,
    cbc::Decryptor<C>: KeyIvInit + BlockDecryptMut,
{
    let cipher = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| CryptoError::Cipher(format!("AES-Initialisierung fehlgeschlagen: {e}")))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Padding)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
