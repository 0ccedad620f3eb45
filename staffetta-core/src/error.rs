use std::fmt;

use serde::{Deserialize, Serialize};

/// Errore condiviso: esito strutturato di una validazione o di una ricerca fallita.
/// Non è mai un errore di trasporto, viene sempre restituito come payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Codice macchina (es. "invalid_request", "not_found")
    pub code: String,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Error {
    pub const INVALID_REQUEST: &'static str = "invalid_request";
    pub const NOT_FOUND: &'static str = "not_found";

    /// Campo obbligatorio assente o vuoto.
    pub fn missing_field(field: &str) -> Self {
        Self {
            code: Self::INVALID_REQUEST.to_string(),
            message: format!("missing or empty field: {}", field),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self {
            code: Self::NOT_FOUND.to_string(),
            message: what.into(),
            details: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Self::NOT_FOUND
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
