use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use staffetta_core::{new_media_token, Error};

use crate::error::ServerResult;

/// Prefisso delle url restituite ai client per scaricare i video.
pub const VIDEO_ROUTE_PREFIX: &str = "/video/";

/// Archivio su file dei contenuti caricati. I file sono nominati con un token
/// casuale che conserva l'estensione originale.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scrive i byte su disco e restituisce il nome generato.
    /// Va chiamato fuori da qualsiasi lock del log.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> ServerResult<String> {
        tokio::fs::create_dir_all(&self.root).await?;
        let token = new_media_token();
        let file_name = match original_name.and_then(extension_of) {
            Some(ext) => format!("{}.{}", token, ext),
            None => token,
        };
        tokio::fs::write(self.root.join(&file_name), bytes).await?;
        Ok(file_name)
    }

    pub async fn load(&self, file_name: &str) -> ServerResult<Vec<u8>> {
        if !is_plain_file_name(file_name) {
            return Err(not_found(file_name).into());
        }
        match tokio::fs::read(self.root.join(file_name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found(file_name).into()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn url_for(file_name: &str) -> String {
        format!("{}{}", VIDEO_ROUTE_PREFIX, file_name)
    }
}

fn not_found(file_name: &str) -> Error {
    Error::not_found(format!("file not found: {}", file_name))
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

// un solo componente, niente separatori né "." / ".."
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

/// Content-Type dedotto dall'estensione del file.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = extension_of(file_name).map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}
