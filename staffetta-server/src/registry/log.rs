use staffetta_core::{Error, Message};
use tokio::sync::RwLock;

use super::GroupRegistry;

/// Sequenza append-only dei messaggi. L'ordine di inserimento è anche l'ordine di consegna.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: RwLock<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valida e accoda il messaggio. Restituisce la nuova lunghezza del log.
    pub async fn append(&self, message: Message) -> Result<usize, Error> {
        message.validate()?;
        let mut entries = self.entries.write().await;
        entries.push(message);
        Ok(entries.len())
    }

    /// Tutto lo storico destinato a `client_id`: broadcast, diretti e messaggi ai
    /// gruppi di cui è membro secondo la membership attuale (non quella all'invio).
    /// Lettura pura: niente stato letto/non letto, nessun cursore.
    pub async fn query_for(&self, client_id: &str, groups: &GroupRegistry) -> Vec<Message> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|m| m.is_addressed_to(client_id, |group| groups.is_member(group, client_id)))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
