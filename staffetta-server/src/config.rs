use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MEDIA_DIR: &str = "./videos";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Configurazione del processo, letta una volta all'avvio dalle variabili d'ambiente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// BIND_ADDR: host:porta su cui ascoltare
    pub bind_addr: SocketAddr,
    /// MEDIA_DIR: directory dei video caricati
    pub media_dir: PathBuf,
    /// MAX_UPLOAD_BYTES: limite del body per /send_video
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Come `from_env` ma con una sorgente arbitraria (usata nei test).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("parse BIND_ADDR {:?}", bind))?;

        let media_dir = lookup("MEDIA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR));

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("parse MAX_UPLOAD_BYTES {:?}", raw))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self { bind_addr, media_dir, max_upload_bytes })
    }
}
