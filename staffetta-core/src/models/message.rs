/* Modello del messaggio instradato dal relay.
    Target indica il destinatario: "all" (broadcast) oppure un nome che può essere
    l'id di un client o il nome di un gruppo; la risoluzione avviene solo in lettura.
    Payload è la variante del contenuto: testo, media inline (blob codificato) o
    riferimento a un video salvato dal server.
*/
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Destinatario di un messaggio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Target {
    /// Broadcast: visibile a chiunque interroghi il log.
    All,
    /// Id di un client o nome di un gruppo, non verificato all'invio.
    Named(String),
}

impl Target {
    pub const ALL: &'static str = "all";

    pub fn as_str(&self) -> &str {
        match self {
            Target::All => Self::ALL,
            Target::Named(name) => name,
        }
    }

    /// Predicato di instradamento: `is_member(name)` risponde se `client_id`
    /// appartiene al gruppo `name` secondo la membership corrente.
    pub fn matches(&self, client_id: &str, is_member: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Target::All => true,
            Target::Named(name) => name == client_id || is_member(name),
        }
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        if s == Self::ALL {
            Target::All
        } else {
            Target::Named(s)
        }
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Target::from(s.to_string())
    }
}

impl From<Target> for String {
    fn from(t: Target) -> Self {
        match t {
            Target::All => Target::ALL.to_string(),
            Target::Named(name) => name,
        }
    }
}

/// Contenuto del messaggio, taggato con "type" sul wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Payload {
    /// Solo testo, obbligatorio.
    Text { text: String },
    /// Blob codificato restituito inline; il testo diventa facoltativo.
    Media {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        media: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    /// Riferimento a un file caricato, da scaricare separatamente.
    Video {
        video_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

impl Payload {
    pub fn text(&self) -> Option<&str> {
        match self {
            Payload::Text { text } => Some(text),
            Payload::Media { text, .. } | Payload::Video { text, .. } => text.as_deref(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text { .. } => "text",
            Payload::Media { .. } => "media",
            Payload::Video { .. } => "video",
        }
    }
}

/// Messaggio immutabile una volta accodato nel log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: Target,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Message {
    pub fn text(from: impl Into<String>, to: impl Into<Target>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            payload: Payload::Text { text: text.into() },
        }
    }

    pub fn video(from: impl Into<String>, to: impl Into<Target>, video_url: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            payload: Payload::Video { video_url: video_url.into(), text: None },
        }
    }

    /// Controlla i campi obbligatori della variante.
    pub fn validate(&self) -> Result<(), Error> {
        if self.from.is_empty() {
            return Err(Error::missing_field("from"));
        }
        if let Target::Named(name) = &self.to {
            if name.is_empty() {
                return Err(Error::missing_field("to"));
            }
        }
        match &self.payload {
            Payload::Text { text } if text.is_empty() => Err(Error::missing_field("text")),
            Payload::Media { media, .. } if media.is_empty() => Err(Error::missing_field("media")),
            Payload::Video { video_url, .. } if video_url.is_empty() => {
                Err(Error::missing_field("video_url"))
            }
            _ => Ok(()),
        }
    }

    pub fn is_addressed_to(&self, client_id: &str, is_member: impl FnOnce(&str) -> bool) -> bool {
        self.to.matches(client_id, is_member)
    }
}
