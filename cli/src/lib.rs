//! kuvert-cli – Bibliotheks-Root
//!
//! Argument-Definitionen und Befehle liegen in der Bibliothek, damit sie
//! ohne Prozessstart getestet werden koennen.

pub mod befehle;
pub mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kuvert")]
#[command(version, about = "Kuvert - RSA-Schluessel, hybrides Verschluesseln und Signieren", long_about = None)]
pub struct Cli {
    /// Konfigurationsdatei (sonst KUVERT_CONFIG, sonst kuvert.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub befehl: Befehl,
}

#[derive(Debug, Subcommand)]
pub enum Befehl {
    /// Neues RSA-Schluessel-Paar erzeugen (<name>.pem und <name>.pub.pem, ueberschreibt nichts)
    Keygen {
        /// Dateiname ohne Endung
        #[arg(short, long)]
        name: String,

        /// Modulus-Groesse in Bit (Standard aus [krypto].rsa_bits)
        #[arg(short, long)]
        bits: Option<usize>,

        /// Zielverzeichnis
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Nachricht versiegeln (Ausgabe: Kuvert als JSON)
    Seal {
        /// Eigener privater Schluessel (PKCS#1-PEM)
        #[arg(short, long)]
        key: Option<PathBuf>,

        /// Oeffentlicher Schluessel des Empfaengers (SPKI-PEM)
        #[arg(short, long)]
        to: Option<PathBuf>,

        /// Eingabedatei, `-` oder weggelassen = stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Ausgabedatei, weggelassen = stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Kuvert oeffnen und Signatur pruefen
    Open {
        /// Eigener privater Schluessel (PKCS#1-PEM)
        #[arg(short, long)]
        key: Option<PathBuf>,

        /// Oeffentlicher Schluessel des Absenders (SPKI-PEM)
        #[arg(short, long)]
        from: Option<PathBuf>,

        /// Kuvert-JSON, `-` oder weggelassen = stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Ausgabedatei, weggelassen = stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Daten signieren (SHA256withRSA, Ausgabe Base64)
    Sign {
        /// Privater Schluessel (PKCS#1-PEM)
        #[arg(short, long)]
        key: Option<PathBuf>,

        /// Eingabedatei, `-` oder weggelassen = stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Base64-Signatur pruefen
    Verify {
        /// Oeffentlicher Schluessel des Unterzeichners (SPKI-PEM)
        #[arg(short, long)]
        key: Option<PathBuf>,

        /// Signatur als Base64
        #[arg(short, long)]
        signature: String,

        /// Eingabedatei, `-` oder weggelassen = stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
