//! Tiklydown Client
//!
//! HTTP client for the public Tiklydown download API. The response body is
//! returned as raw JSON; callers decide whether it is usable.

pub mod client;
pub mod error;

pub use client::{TiklydownClient, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::TiklydownError;
