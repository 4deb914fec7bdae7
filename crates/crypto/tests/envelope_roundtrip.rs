//! Integration-Tests fuer das Kuvert-Protokoll (Alice -> Bob)

use std::sync::OnceLock;

use kuvert_crypto::{
    generate_key_pair, load_private_key, load_public_key, open, seal, seal_with_key_size,
    AesKeySize, CryptoError, Envelope, EnvelopeB64, KeyPair,
};

const REFERENCE_PRIVATE_PEM: &str = include_str!("fixtures/reference_rsa_private.pem");
const REFERENCE_PUBLIC_PEM: &str = include_str!("fixtures/reference_public.pem");

fn alice() -> &'static KeyPair {
    static ALICE: OnceLock<KeyPair> = OnceLock::new();
    ALICE.get_or_init(|| generate_key_pair(2048).expect("Schluesselerzeugung fehlgeschlagen"))
}

fn bob() -> &'static KeyPair {
    static BOB: OnceLock<KeyPair> = OnceLock::new();
    BOB.get_or_init(|| generate_key_pair(2048).expect("Schluesselerzeugung fehlgeschlagen"))
}

#[test]
fn alice_schickt_bob_123() {
    let (alice, bob) = (alice(), bob());

    let envelope = seal(b"123", &alice.private, &bob.public).unwrap();
    let opened = open(&envelope, &bob.private, &alice.public).unwrap();

    assert!(opened.is_authentic());
    assert_eq!(opened.message, b"123");
}

#[test]
fn gekipptes_ciphertext_byte_ist_nicht_authentisch() {
    let (alice, bob) = (alice(), bob());
    let envelope = seal(b"123", &alice.private, &bob.public).unwrap();

    let (wrapped_key, iv, mut ciphertext, signature) = envelope.into_parts();
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;
    let tampered = Envelope::from_parts(wrapped_key, &iv, ciphertext, signature).unwrap();

    let opened = open(&tampered, &bob.private, &alice.public).unwrap();
    assert!(!opened.is_authentic());
}

#[test]
fn manipulierter_iv_aendert_nur_den_ersten_block() {
    let (alice, bob) = (alice(), bob());
    let message = b"Erster Block 16B und noch etwas mehr Text";
    let envelope = seal(message, &alice.private, &bob.public).unwrap();

    let (wrapped_key, mut iv, ciphertext, signature) = envelope.into_parts();
    iv[0] ^= 0x01;
    let tampered = Envelope::from_parts(wrapped_key, &iv, ciphertext, signature).unwrap();

    // Die Signatur deckt nur den Ciphertext ab: der IV ist nicht authentisiert
    let opened = open(&tampered, &bob.private, &alice.public).unwrap();
    assert!(opened.is_authentic());
    assert_ne!(opened.message[0], message[0]);
    assert_eq!(&opened.message[1..], &message[1..]);
}

#[test]
fn manipulierter_wrapped_key_scheitert() {
    let (alice, bob) = (alice(), bob());
    let envelope = seal(b"123", &alice.private, &bob.public).unwrap();

    let (mut wrapped_key, iv, ciphertext, signature) = envelope.into_parts();
    wrapped_key[5] ^= 0x80;
    let tampered = Envelope::from_parts(wrapped_key, &iv, ciphertext, signature).unwrap();

    match open(&tampered, &bob.private, &alice.public) {
        Err(e) => assert!(e.is_integrity_failure()),
        Ok(opened) => assert!(!opened.is_authentic()),
    }
}

#[test]
fn referenzschluessel_als_absender() {
    let sender_private = load_private_key(REFERENCE_PRIVATE_PEM).unwrap();
    let sender_public = load_public_key(REFERENCE_PUBLIC_PEM).unwrap();
    let bob = bob();

    let envelope = seal(b"vom Referenzschluessel", &sender_private, &bob.public).unwrap();
    assert_eq!(envelope.signature().len(), 128);

    let opened = open(&envelope, &bob.private, &sender_public).unwrap();
    assert_eq!(opened.authenticated().as_deref(), Some(&b"vom Referenzschluessel"[..]));
}

#[test]
fn referenzschluessel_als_empfaenger() {
    // 1023-Bit-Modulus: 117 Bytes Nutzlast reichen fuer einen AES-256-Schluessel
    let receiver_private = load_private_key(REFERENCE_PRIVATE_PEM).unwrap();
    let receiver_public = load_public_key(REFERENCE_PUBLIC_PEM).unwrap();
    let alice = alice();

    let envelope = seal(b"an den Referenzschluessel", &alice.private, &receiver_public).unwrap();
    assert_eq!(envelope.wrapped_key().len(), 128);

    let opened = open(&envelope, &receiver_private, &alice.public).unwrap();
    assert!(opened.is_authentic());
}

#[test]
fn alle_aes_groessen() {
    let (alice, bob) = (alice(), bob());
    for size in [AesKeySize::Aes128, AesKeySize::Aes192, AesKeySize::Aes256] {
        let envelope = seal_with_key_size(b"Groessentest", size, &alice.private, &bob.public)
            .unwrap();
        let opened = open(&envelope, &bob.private, &alice.public).unwrap();
        assert_eq!(opened.authenticated(), Some(b"Groessentest".to_vec()), "{size:?}");
    }
}

#[test]
fn json_transport() {
    let (alice, bob) = (alice(), bob());
    let envelope = seal("Grüße an Bob".as_bytes(), &alice.private, &bob.public).unwrap();

    let json = serde_json::to_string_pretty(&EnvelopeB64::from(&envelope)).unwrap();
    let received: EnvelopeB64 = serde_json::from_str(&json).unwrap();
    let opened = open(&received.to_envelope().unwrap(), &bob.private, &alice.public).unwrap();

    assert_eq!(
        String::from_utf8(opened.authenticated().unwrap()).unwrap(),
        "Grüße an Bob"
    );
}

#[test]
fn falscher_empfaenger() {
    let (alice, bob) = (alice(), bob());
    let envelope = seal(b"nur fuer Bob", &alice.private, &bob.public).unwrap();

    let result = open(&envelope, &alice.private, &alice.public);
    assert!(matches!(result, Err(CryptoError::Decryption(_))));
}
