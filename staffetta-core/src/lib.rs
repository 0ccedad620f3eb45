//! staffetta-core: tipi condivisi tra client e server (modelli, DTO HTTP, errori).
//! Niente I/O: il routing dei messaggi è espresso qui come predicato puro su `Target`.

pub mod error;
pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use error::Error;
pub use models::{Client, ClientAddress, Group, Message, Payload, Port, Target};
pub use protocol::http::{
    CreateGroupRequest, ListClientsResponse, ListMessagesResponse, NotFoundResponse,
    RegisterRequest, SendRequest, Status, StatusResponse,
};
pub use utils::new_media_token;
