//! PKCS#1 → PKCS#8 Konvertierung
//!
//! Legt um einen PKCS#1-`RSAPrivateKey` einen minimalen PKCS#8-Rahmen:
//!
//! ```text
//! 30 82 LL LL                         SEQUENCE, Laenge = n + 22
//!    02 01 00                         INTEGER 0 (Version)
//!    30 0D                            SEQUENCE (AlgorithmIdentifier)
//!       06 09 2A 86 48 86 F7 0D 01 01 01    OID 1.2.840.113549.1.1.1 (rsaEncryption)
//!       05 00                         NULL
//!    04 82 NN NN                      OCTET STRING, Laenge = n
//!       <pkcs1 bytes>
//! ```
//!
//! Beide Laengen werden immer in der Zwei-Byte-Form (`0x82`) geschrieben.
//! Das Byte-Layout ist kompatibel mit bereits serialisierten Schluesseln und
//! darf nicht auf variable DER-Laengen umgestellt werden.

use crate::error::{CryptoError, CryptoResult};

/// Laenge des festen PKCS#8-Headers
pub const PKCS8_HEADER_LEN: usize = 26;

/// Header-Bytes nach dem aeusseren Laengenfeld bis zum Inhalt des OCTET STRING
const PKCS8_WRAPPER_OVERHEAD: usize = 22;

/// AlgorithmIdentifier fuer rsaEncryption mit NULL-Parameter
const RSA_ALGORITHM_IDENTIFIER: [u8; 15] = [
    0x30, 0x0D, 0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01, 0x05, 0x00,
];

/// Verpackt PKCS#1-Bytes in einen PKCS#8-`PrivateKeyInfo`
///
/// Schlaegt fehl wenn die Gesamtlaenge nicht in zwei Laengen-Bytes passt.
pub fn pkcs1_to_pkcs8(pkcs1_bytes: &[u8]) -> CryptoResult<Vec<u8>> {
    let n = pkcs1_bytes.len();
    let total = n + PKCS8_WRAPPER_OVERHEAD;

    let (Ok(total_len), Ok(inner_len)) = (u16::try_from(total), u16::try_from(n)) else {
        return Err(CryptoError::KeyFormat(format!(
            "PKCS#1-Schluessel zu gross fuer den PKCS#8-Rahmen: {n} Bytes"
        )));
    };

    let mut out = Vec::with_capacity(PKCS8_HEADER_LEN + n);
    out.extend_from_slice(&[0x30, 0x82]);
    out.extend_from_slice(&total_len.to_be_bytes());
    out.extend_from_slice(&[0x02, 0x01, 0x00]);
    out.extend_from_slice(&RSA_ALGORITHM_IDENTIFIER);
    out.extend_from_slice(&[0x04, 0x82]);
    out.extend_from_slice(&inner_len.to_be_bytes());
    out.extend_from_slice(pkcs1_bytes);

    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
