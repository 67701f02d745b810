// tikfetch API Library
//
// HTTP/JSON surface over the tikfetch core services

pub mod http;

// Re-export commonly used types
pub use http::{create_router, AppState};
