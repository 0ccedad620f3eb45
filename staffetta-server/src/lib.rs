use axum::http::StatusCode;

pub mod config;
pub mod controllers;
pub mod error;
pub mod media;
pub mod registry;
pub mod routes;

pub use config::Config;
pub use error::{ServerError, ServerResult};
pub use media::MediaStore;
pub use registry::{ClientRegistry, GroupRegistry, MessageLog};

/// Stato condiviso iniettato negli handler tramite `Extension<Arc<AppState>>`.
/// Ogni componente è indipendente e protetto dalla propria sincronizzazione.
#[derive(Debug)]
pub struct AppState {
    pub clients: ClientRegistry,
    pub groups: GroupRegistry,
    pub log: MessageLog,
    pub media: MediaStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            clients: ClientRegistry::new(),
            groups: GroupRegistry::new(),
            log: MessageLog::new(),
            media: MediaStore::new(config.media_dir.clone()),
            config,
        }
    }
}

/// Il processo risponde finché serve richieste: nessuna dipendenza esterna da verificare.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
