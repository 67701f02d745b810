// Download providers
//
// Each provider wraps one upstream client and reduces every outcome to
// "a payload" or "nothing". The chain tries them in order.

pub mod chain;
pub mod tikwm;
pub mod tiklydown;
pub mod traits;

pub use chain::DownloadChain;
pub use tikwm::TikwmProvider;
pub use tiklydown::TiklydownProvider;
pub use traits::{payload_from_value, DownloadPayload, DownloadProvider};
