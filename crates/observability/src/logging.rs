//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable (hat Vorrang vor der Konfigurationsdatei):
//! - `KUVERT_LOG_LEVEL`: Filter-Direktive (z.B. `debug` oder `kuvert_crypto=trace`), Standard: info
//! - `KUVERT_LOG_FORMAT`: Format (text/json), Standard: text

use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_LEVEL_ENV: &str = "KUVERT_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "KUVERT_LOG_FORMAT";

/// Ausgabeformat der Log-Zeilen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingFehler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(LoggingFehler::UnbekanntesFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingFehler {
    #[error("Unbekanntes Log-Format '{0}' (erlaubt: text, json)")]
    UnbekanntesFormat(String),

    #[error("Ungueltige Log-Filter-Direktive: {0}")]
    UngueltigerFilter(String),

    #[error("Logging bereits initialisiert: {0}")]
    BereitsInitialisiert(String),
}

/// Initialisiert das Logging-System.
///
/// `level` und `format` stammen aus der Konfiguration; gesetzte
/// `KUVERT_LOG_*`-Variablen ueberschreiben sie.
pub fn logging_initialisieren(level: &str, format: &str) -> Result<(), LoggingFehler> {
    let level = wert_aufloesen(std::env::var(LOG_LEVEL_ENV).ok(), level);
    let format: LogFormat = wert_aufloesen(std::env::var(LOG_FORMAT_ENV).ok(), format).parse()?;

    let filter = filter_bauen(&level)?;

    let ergebnis = match format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    ergebnis.map_err(|e| LoggingFehler::BereitsInitialisiert(e.to_string()))?;

    tracing::debug!(level = %level, ?format, "Logging initialisiert");
    Ok(())
}

/// Umgebungswert vor Konfigurationswert; leere Variablen zaehlen als nicht gesetzt
fn wert_aufloesen(env: Option<String>, konfiguriert: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| konfiguriert.to_string())
}

fn filter_bauen(level: &str) -> Result<EnvFilter, LoggingFehler> {
    EnvFilter::try_new(level).map_err(|e| LoggingFehler::UngueltigerFilter(e.to_string()))
}

/// Validiert ob ein einfacher Log-Level-String gueltig ist.
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error" | "off")
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    format.parse::<LogFormat>().is_ok()
}
