//! # kuvert-observability
//!
//! Structured Logging via tracing-subscriber fuer das `kuvert`-Werkzeug.
//! Logs gehen immer nach stderr, damit stdout fuer Kuverts und Signaturen frei bleibt.

pub mod logging;

pub use logging::{
    log_format_gueltig, log_level_gueltig, logging_initialisieren, LogFormat, LoggingFehler,
};
