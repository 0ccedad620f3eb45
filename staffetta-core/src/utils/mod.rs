pub mod ids;

pub use ids::new_media_token;
