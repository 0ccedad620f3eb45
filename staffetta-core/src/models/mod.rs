pub mod client;
pub mod group;
pub mod message;

// Re-export per comodità
pub use client::{Client, ClientAddress, Port};
pub use group::Group;
pub use message::{Message, Payload, Target};
