//! TikTok oEmbed Client

pub mod client;
pub mod error;

pub use client::{OembedClient, DEFAULT_BASE_URL};
pub use error::OembedError;
