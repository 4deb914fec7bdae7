//! Gemeinsame Test-Schluessel (einmal pro Testlauf erzeugt)

use std::sync::OnceLock;

use crate::keys::{generate_key_pair, KeyPair};

pub(crate) fn alice() -> &'static KeyPair {
    static ALICE: OnceLock<KeyPair> = OnceLock::new();
    ALICE.get_or_init(|| generate_key_pair(2048).unwrap())
}

pub(crate) fn bob() -> &'static KeyPair {
    static BOB: OnceLock<KeyPair> = OnceLock::new();
    BOB.get_or_init(|| generate_key_pair(2048).unwrap())
}
