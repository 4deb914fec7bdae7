//! CLI-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! Standardwerte; ohne Konfigurationsdatei muessen Schluesselpfade
//! auf der Kommandozeile angegeben werden.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use kuvert_observability::{log_format_gueltig, log_level_gueltig};
use serde::{Deserialize, Serialize};

/// Standard-Dateiname, falls weder `--config` noch `KUVERT_CONFIG` gesetzt ist
pub const STANDARD_PFAD: &str = "kuvert.toml";

/// Umgebungsvariable fuer den Konfigurationspfad
pub const CONFIG_ENV: &str = "KUVERT_CONFIG";

/// Vollstaendige Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KuvertConfig {
    /// Pfade zu PEM-Dateien
    pub schluessel: SchluesselEinstellungen,
    /// Schluesselgroessen
    pub krypto: KryptoEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// PEM-Dateipfade (alle optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchluesselEinstellungen {
    /// Eigener privater Schluessel (PKCS#1-PEM)
    pub eigener_privat: Option<PathBuf>,
    /// Oeffentlicher Schluessel des Gegenuebers (SPKI-PEM)
    pub partner_oeffentlich: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KryptoEinstellungen {
    /// Modulus-Groesse fuer `keygen`
    pub rsa_bits: usize,
    /// AES-Schluesselgroesse fuer `seal` (128, 192 oder 256)
    pub aes_bits: u32,
}

impl Default for KryptoEinstellungen {
    fn default() -> Self {
        Self {
            rsa_bits: 2048,
            aes_bits: 256,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error", "off"
    ///
    /// Filter-Direktiven pro Modul nur ueber `KUVERT_LOG_LEVEL`.
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl KuvertConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .with_context(|| format!("Konfigurationsfehler in '{}'", pfad.display()))?;
                config
                    .pruefen()
                    .with_context(|| format!("Konfigurationsfehler in '{}'", pfad.display()))?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Logging ist zu diesem Zeitpunkt noch nicht initialisiert
                Ok(Self::default())
            }
            Err(e) => Err(e)
                .with_context(|| format!("Konfigurationsdatei '{}' nicht lesbar", pfad.display())),
        }
    }

    /// Prueft Werte, die serde allein nicht abdeckt
    pub fn pruefen(&self) -> anyhow::Result<()> {
        if !log_level_gueltig(&self.logging.level) {
            bail!(
                "[logging].level '{}' ungueltig (trace/debug/info/warn/error/off)",
                self.logging.level
            );
        }
        if !log_format_gueltig(&self.logging.format) {
            bail!(
                "[logging].format '{}' ungueltig (text/json)",
                self.logging.format
            );
        }
        Ok(())
    }

    /// Bestimmt den Konfigurationspfad: Flag, dann Umgebung, dann Standard
    pub fn pfad_bestimmen(flag: Option<&Path>, env: Option<String>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(STANDARD_PFAD))
    }
}
