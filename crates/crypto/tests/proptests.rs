//! Property-Tests: AES-CBC und Kuvert ueber beliebige Nachrichten

use std::sync::OnceLock;

use kuvert_crypto::symmetric::{decrypt, encrypt, generate_iv, generate_key};
use kuvert_crypto::{generate_key_pair, open, seal, AesKeySize, Envelope, KeyPair};
use proptest::prelude::*;

fn keys() -> &'static (KeyPair, KeyPair) {
    static KEYS: OnceLock<(KeyPair, KeyPair)> = OnceLock::new();
    KEYS.get_or_init(|| {
        (
            generate_key_pair(2048).expect("Schluesselerzeugung fehlgeschlagen"),
            generate_key_pair(2048).expect("Schluesselerzeugung fehlgeschlagen"),
        )
    })
}

fn aes_size() -> impl Strategy<Value = AesKeySize> {
    prop_oneof![
        Just(AesKeySize::Aes128),
        Just(AesKeySize::Aes192),
        Just(AesKeySize::Aes256),
    ]
}

proptest! {
    #[test]
    fn aes_cbc_roundtrip(plaintext in prop::collection::vec(any::<u8>(), 0..512), size in aes_size()) {
        let key = generate_key(size);
        let iv = generate_iv();

        let ciphertext = encrypt(&plaintext, &key, &iv).unwrap();
        prop_assert_eq!(ciphertext.len(), (plaintext.len() / 16 + 1) * 16);
        prop_assert_eq!(decrypt(&ciphertext, &key, &iv).unwrap(), plaintext);
    }
}

proptest! {
    // RSA-Operationen sind teuer, daher wenige Faelle
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn kuvert_roundtrip(message in prop::collection::vec(any::<u8>(), 0..1024)) {
        let (alice, bob) = keys();

        let envelope = seal(&message, &alice.private, &bob.public).unwrap();
        let opened = open(&envelope, &bob.private, &alice.public).unwrap();

        prop_assert!(opened.is_authentic());
        prop_assert_eq!(opened.message, message);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn gekipptes_bit_wird_nie_als_authentisch_gemeldet(
        message in prop::collection::vec(any::<u8>(), 0..256),
        in_signatur in any::<bool>(),
        bit in any::<prop::sample::Index>(),
    ) {
        let (alice, bob) = keys();
        let envelope = seal(&message, &alice.private, &bob.public).unwrap();

        let (wrapped_key, iv, mut ciphertext, mut signature) = envelope.into_parts();
        let ziel = if in_signatur { &mut signature } else { &mut ciphertext };
        let pos = bit.index(ziel.len() * 8);
        ziel[pos / 8] ^= 1 << (pos % 8);
        let tampered = Envelope::from_parts(wrapped_key, &iv, ciphertext, signature).unwrap();

        // Fehler sind erlaubt, eine authentische Nachricht nicht
        if let Ok(opened) = open(&tampered, &bob.private, &alice.public) {
            prop_assert!(!opened.is_authentic());
        }
    }
}
