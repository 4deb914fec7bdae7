//! Kuvert-Protokoll: hybrides Verschluesseln und Signieren
//!
//! Sender und Empfaenger besitzen je ein RSA-Schluessel-Paar.
//!
//! ## Ablauf Sender (`seal`)
//! 1. Frischer AES-256-Schluessel `K` und frischer 16-Byte-IV
//! 2. `ciphertext = AES-CBC(message, K, iv)`
//! 3. `digest = SHA-256(ciphertext)`
//! 4. `signature = SHA256withRSA(digest, sender_private)`
//! 5. `wrapped_key = RSA(K, receiver_public)`
//!
//! ## Ablauf Empfaenger (`open`)
//! 1. `K` mit dem eigenen privaten Schluessel auspacken
//! 2. `ciphertext` entschluesseln
//! 3. `SHA-256(ciphertext)` lokal neu berechnen
//! 4. Signatur mit dem oeffentlichen Schluessel des Senders pruefen
//!
//! Die Signatur deckt den Ciphertext ab, nicht den Klartext. Damit ist sie an
//! genau die uebertragenen Bytes gebunden.

pub mod codec;
pub mod open;
pub mod seal;

pub use codec::EnvelopeB64;
pub use open::open;
pub use seal::{seal, seal_with_key_size};
