use uuid::Uuid;

/// Genera un token casuale (UUIDv4 senza trattini) usato come nome dei file caricati.
pub fn new_media_token() -> String {
    Uuid::new_v4().simple().to_string()
}
