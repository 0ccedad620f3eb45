//! Stato condiviso del relay. Ogni componente possiede la propria sincronizzazione
//! e nessuno scade o viene ripulito: la crescita in memoria è illimitata.

pub mod clients;
pub mod groups;
pub mod log;

pub use clients::ClientRegistry;
pub use groups::GroupRegistry;
pub use log::MessageLog;
