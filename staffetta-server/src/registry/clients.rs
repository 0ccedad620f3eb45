use dashmap::DashMap;
use staffetta_core::{Client, ClientAddress, Error, Port};

/// Mappa id client -> indirizzo di rete. Upsert idempotente, nessuna rimozione.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: DashMap<String, ClientAddress>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra o sovrascrive l'indirizzo di `id` (last-write-wins, nessun merge).
    /// In caso di validazione fallita non modifica nulla.
    pub fn register(&self, id: &str, ip: &str, port: Option<Port>) -> Result<Client, Error> {
        if id.is_empty() {
            return Err(Error::missing_field("id"));
        }
        if ip.is_empty() {
            return Err(Error::missing_field("ip"));
        }
        let port = port.ok_or_else(|| Error::missing_field("port"))?;

        let address = ClientAddress { ip: ip.to_string(), port };
        self.clients.insert(id.to_string(), address.clone());
        Ok(Client { id: id.to_string(), address })
    }

    /// Id registrati, in ordine arbitrario.
    pub fn list_ids(&self) -> Vec<String> {
        self.clients.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<Client> {
        self.clients.get(id).map(|entry| Client {
            id: entry.key().clone(),
            address: entry.value().clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
