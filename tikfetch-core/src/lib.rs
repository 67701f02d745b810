// tikfetch Core
//
// Configuration, logging, error taxonomy and the request-level services
// (download fallback chain, video info lookup, direct download resolver).

pub mod bootstrap;
pub mod config;
pub mod direct;
pub mod error;
pub mod logging;
pub mod provider;
pub mod tiktok;
pub mod video_info;

pub use config::Config;
pub use error::{Error, Result};
