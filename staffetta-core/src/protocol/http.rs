use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{Message, Payload, Port, Target};
/*
    dto http per le richieste e le risposte del relay.
    I campi delle richieste sono tutti Option: un campo mancante è un errore di
    validazione riportato nel body, non un fallimento del parsing.
*/
// Register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<Port>,
}

// Clients listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListClientsResponse {
    pub clients: Vec<String>,
}

// Create group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

impl CreateGroupRequest {
    /// Membri deduplicati (la membership è un insieme).
    pub fn member_set(&self) -> BTreeSet<String> {
        self.members.iter().cloned().collect()
    }
}

// Send
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Blob codificato (es. base64) restituito inline ai destinatari.
    #[serde(default)]
    pub media: Option<String>,
    /// Tipo del media, stile MIME.
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
}

/// `media` presente -> variante media (testo facoltativo), altrimenti testo obbligatorio.
/// Un `type` senza `media` è un errore: il tipo descrive solo un media allegato.
impl TryFrom<SendRequest> for Message {
    type Error = Error;

    fn try_from(req: SendRequest) -> Result<Self, Self::Error> {
        let from = non_empty(req.from, "from")?;
        let to = non_empty(req.to, "to")?;
        let media_type = req.media_type.filter(|t| !t.is_empty());
        let payload = match req.media.filter(|m| !m.is_empty()) {
            Some(media) => Payload::Media {
                text: req.text.filter(|t| !t.is_empty()),
                media,
                media_type,
            },
            None if media_type.is_some() => return Err(Error::missing_field("media")),
            None => Payload::Text { text: non_empty(req.text, "text")? },
        };
        let message = Message { from, to: Target::from(to), payload };
        message.validate()?;
        Ok(message)
    }
}

/// Estrae un campo stringa obbligatorio e non vuoto.
pub fn non_empty(value: Option<String>, field: &str) -> Result<String, Error> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing_field(field)),
    }
}

// List messages (storico completo, nessun cursore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<Message>,
}

/// Esito di una richiesta di mutazione.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    /// Presente se status = error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Presente solo dopo un upload video riuscito
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok, message: None, video_url: None }
    }

    pub fn with_video_url(video_url: impl Into<String>) -> Self {
        Self { video_url: Some(video_url.into()), ..Self::ok() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: Status::Error, message: Some(message.into()), video_url: None }
    }
}

impl From<Error> for StatusResponse {
    fn from(err: Error) -> Self {
        StatusResponse::error(err.message)
    }
}

/// Risposta per una risorsa assente (es. file video).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub error: String,
}
