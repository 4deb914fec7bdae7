//! Umsetzung der Unterbefehle
//!
//! Die reinen Funktionen (`versiegeln`, `oeffnen`, ...) arbeiten auf Bytes und
//! geladenen Schluesseln; `ausfuehren` erledigt Dateien, stdin und stdout.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kuvert_crypto::signature::{sign, verify};
use kuvert_crypto::{
    generate_key_pair, load_private_key, load_public_key, open, seal_with_key_size, AesKeySize,
    EnvelopeB64, PrivateKey, PublicKey,
};

use crate::config::KuvertConfig;
use crate::Befehl;

/// Fuehrt einen Unterbefehl mit der geladenen Konfiguration aus
pub fn ausfuehren(befehl: Befehl, config: &KuvertConfig) -> Result<()> {
    let schluessel = &config.schluessel;

    match befehl {
        Befehl::Keygen { name, bits, out_dir } => {
            let bits = bits.unwrap_or(config.krypto.rsa_bits);
            let (privat, oeffentlich) = schluessel_erzeugen(&name, bits, &out_dir)?;
            tracing::info!(
                bits,
                privat = %privat.display(),
                oeffentlich = %oeffentlich.display(),
                "Schluessel-Paar geschrieben"
            );
        }
        Befehl::Seal { key, to, input, output } => {
            let eigener = privaten_schluessel_laden(key, schluessel.eigener_privat.as_ref())?;
            let partner = oeffentlichen_schluessel_laden(to, schluessel.partner_oeffentlich.as_ref())?;
            let aes = AesKeySize::from_bits(config.krypto.aes_bits)?;

            let nachricht = eingabe_lesen(input.as_deref())?;
            let json = versiegeln(&nachricht, &eigener, &partner, aes)?;
            ausgabe_schreiben(output.as_deref(), format!("{json}\n").as_bytes())?;
        }
        Befehl::Open { key, from, input, output } => {
            let eigener = privaten_schluessel_laden(key, schluessel.eigener_privat.as_ref())?;
            let absender =
                oeffentlichen_schluessel_laden(from, schluessel.partner_oeffentlich.as_ref())?;

            let json = eingabe_lesen(input.as_deref())?;
            let nachricht = oeffnen(&json, &eigener, &absender)?;
            ausgabe_schreiben(output.as_deref(), &nachricht)?;
        }
        Befehl::Sign { key, input } => {
            let eigener = privaten_schluessel_laden(key, schluessel.eigener_privat.as_ref())?;
            let daten = eingabe_lesen(input.as_deref())?;
            let signatur = signieren(&daten, &eigener)?;
            ausgabe_schreiben(None, format!("{signatur}\n").as_bytes())?;
        }
        Befehl::Verify { key, signature, input } => {
            let unterzeichner =
                oeffentlichen_schluessel_laden(key, schluessel.partner_oeffentlich.as_ref())?;
            let daten = eingabe_lesen(input.as_deref())?;
            let gueltig = verifizieren(&daten, &signature, &unterzeichner)?;
            ausgabe_schreiben(None, format!("{gueltig}\n").as_bytes())?;
            if !gueltig {
                bail!("Signatur ungueltig");
            }
        }
    }

    Ok(())
}

/// Erzeugt ein Schluessel-Paar und schreibt `<name>.pem` und `<name>.pub.pem`
///
/// Vorhandene Dateien werden nie ueberschrieben.
pub fn schluessel_erzeugen(name: &str, bits: usize, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let privat_pfad = out_dir.join(format!("{name}.pem"));
    let oeffentlich_pfad = out_dir.join(format!("{name}.pub.pem"));

    for pfad in [&privat_pfad, &oeffentlich_pfad] {
        if pfad.exists() {
            bail!("'{}' existiert bereits, wird nicht ueberschrieben", pfad.display());
        }
    }

    let paar = generate_key_pair(bits)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Verzeichnis '{}' nicht anlegbar", out_dir.display()))?;

    privat_schreiben(&privat_pfad, paar.private.to_pem()?.as_bytes())?;
    neu_schreiben(&oeffentlich_pfad, paar.public.to_pem()?.as_bytes())?;

    Ok((privat_pfad, oeffentlich_pfad))
}

/// Versiegelt eine Nachricht und liefert das Kuvert als JSON
pub fn versiegeln(
    nachricht: &[u8],
    eigener: &PrivateKey,
    partner: &PublicKey,
    aes: AesKeySize,
) -> Result<String> {
    let kuvert = seal_with_key_size(nachricht, aes, eigener, partner)?;
    Ok(serde_json::to_string_pretty(&EnvelopeB64::from(&kuvert))?)
}

/// Oeffnet ein Kuvert-JSON; nicht authentische Kuverts sind ein Fehler
pub fn oeffnen(json: &[u8], eigener: &PrivateKey, absender: &PublicKey) -> Result<Vec<u8>> {
    let kodiert: EnvelopeB64 =
        serde_json::from_slice(json).context("Eingabe ist kein Kuvert-JSON")?;
    let kuvert = kodiert.to_envelope()?;

    match open(&kuvert, eigener, absender)?.authenticated() {
        Some(nachricht) => Ok(nachricht),
        None => bail!("Kuvert nicht authentisch: Signatur des Absenders ungueltig"),
    }
}

/// Signiert Daten und liefert die Signatur als Base64
pub fn signieren(daten: &[u8], eigener: &PrivateKey) -> Result<String> {
    Ok(STANDARD.encode(sign(daten, eigener)?))
}

/// Prueft eine Base64-Signatur
pub fn verifizieren(daten: &[u8], signatur_b64: &str, unterzeichner: &PublicKey) -> Result<bool> {
    let signatur = STANDARD
        .decode(signatur_b64.trim())
        .context("Signatur ist kein gueltiges Base64")?;
    Ok(verify(daten, &signatur, unterzeichner)?)
}

fn privaten_schluessel_laden(
    flag: Option<PathBuf>,
    konfiguriert: Option<&PathBuf>,
) -> Result<PrivateKey> {
    let pfad = pfad_waehlen(flag, konfiguriert)
        .context("Kein privater Schluessel angegeben (--key oder [schluessel].eigener_privat)")?;
    let pem = pem_lesen(&pfad)?;
    load_private_key(&pem).with_context(|| format!("'{}' ungueltig", pfad.display()))
}

fn oeffentlichen_schluessel_laden(
    flag: Option<PathBuf>,
    konfiguriert: Option<&PathBuf>,
) -> Result<PublicKey> {
    let pfad = pfad_waehlen(flag, konfiguriert).context(
        "Kein oeffentlicher Schluessel angegeben (Flag oder [schluessel].partner_oeffentlich)",
    )?;
    let pem = pem_lesen(&pfad)?;
    load_public_key(&pem).with_context(|| format!("'{}' ungueltig", pfad.display()))
}

/// Flag vor Konfiguration
fn pfad_waehlen(flag: Option<PathBuf>, konfiguriert: Option<&PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| konfiguriert.cloned())
}

fn pem_lesen(pfad: &Path) -> Result<String> {
    std::fs::read_to_string(pfad)
        .with_context(|| format!("Schluesseldatei '{}' nicht lesbar", pfad.display()))
}

fn eingabe_lesen(pfad: Option<&Path>) -> Result<Vec<u8>> {
    match pfad {
        Some(p) if p != Path::new("-") => {
            std::fs::read(p).with_context(|| format!("'{}' nicht lesbar", p.display()))
        }
        _ => {
            let mut puffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut puffer)
                .context("stdin nicht lesbar")?;
            Ok(puffer)
        }
    }
}

fn ausgabe_schreiben(pfad: Option<&Path>, daten: &[u8]) -> Result<()> {
    match pfad {
        Some(p) => std::fs::write(p, daten)
            .with_context(|| format!("'{}' nicht schreibbar", p.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(daten)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Private Schluessel nur fuer den Eigentuemer lesbar anlegen
#[cfg(unix)]
fn privat_schreiben(pfad: &Path, daten: &[u8]) -> Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut datei = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(pfad)
        .with_context(|| format!("'{}' nicht neu anlegbar", pfad.display()))?;
    // umask kann den Modus beim Anlegen einschraenken, aber nicht erweitern
    datei.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    datei.write_all(daten)?;
    Ok(())
}

#[cfg(not(unix))]
fn privat_schreiben(pfad: &Path, daten: &[u8]) -> Result<()> {
    neu_schreiben(pfad, daten)
}

fn neu_schreiben(pfad: &Path, daten: &[u8]) -> Result<()> {
    let mut datei = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(pfad)
        .with_context(|| format!("'{}' nicht neu anlegbar", pfad.display()))?;
    datei.write_all(daten)?;
    Ok(())
}
