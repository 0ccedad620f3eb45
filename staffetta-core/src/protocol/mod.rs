pub mod http;

// Re-export comodi
pub use http::{
    CreateGroupRequest, ListClientsResponse, ListMessagesResponse, NotFoundResponse,
    RegisterRequest, SendRequest, Status, StatusResponse,
};
