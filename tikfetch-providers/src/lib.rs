// tikfetch Provider Clients
//
// Pure HTTP clients for the third-party services tikfetch talks to.
// They know nothing about fallback ordering or HTTP responses; the
// adapters in tikfetch-core decide what a failure means.
//
// - tiklydown: primary download API (raw JSON passthrough)
// - tikwm: secondary download API (code/data envelope)
// - oembed: TikTok's public oEmbed endpoint

pub mod oembed;
pub mod tikwm;
pub mod tiklydown;

mod base_url;

// Re-export client types for convenience
pub use oembed::{OembedClient, OembedError};
pub use tikwm::{TikwmClient, TikwmError, TikwmVideo};
pub use tiklydown::{TiklydownClient, TiklydownError};
