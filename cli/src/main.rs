//! kuvert – Einstiegspunkt
//!
//! Parst die Argumente, laedt die Konfiguration, initialisiert das Logging
//! und fuehrt den Unterbefehl aus.

use anyhow::Result;
use clap::Parser;
use kuvert_cli::config::{KuvertConfig, CONFIG_ENV};
use kuvert_cli::{befehle, Cli};
use kuvert_observability::logging_initialisieren;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Konfigurationsdatei-Pfad aus Flag, Umgebungsvariable oder Standard
    let config_pfad =
        KuvertConfig::pfad_bestimmen(cli.config.as_deref(), std::env::var(CONFIG_ENV).ok());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let config = KuvertConfig::laden(&config_pfad)?;

    logging_initialisieren(&config.logging.level, &config.logging.format)?;

    if !config_pfad.is_file() {
        tracing::debug!(
            pfad = %config_pfad.display(),
            "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
        );
    }
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad.display(),
        "kuvert gestartet"
    );

    befehle::ausfuehren(cli.befehl, &config)
}
