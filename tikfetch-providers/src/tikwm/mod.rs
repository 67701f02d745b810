//! TikWM Client
//!
//! HTTP client for the TikWM API. Responses arrive in a
//! `{ code, msg, data }` envelope where `code == 0` means success.

pub mod client;
pub mod error;
pub mod types;

pub use client::{TikwmClient, DEFAULT_BASE_URL};
pub use error::TikwmError;
pub use types::*;
