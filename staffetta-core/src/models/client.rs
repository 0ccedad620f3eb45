use serde::{Deserialize, Serialize};

/// Porta così come arriva nel JSON: nessun limite di intervallo, anche oltre u64.
pub type Port = serde_json::Number;

/// Indirizzo di rete dichiarato da un client in fase di registrazione.
/// La porta non viene validata: basta che sia presente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAddress {
    pub ip: String,
    pub port: Port,
}

/// Client registrato esposto sul wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(flatten)]
    pub address: ClientAddress,
}
