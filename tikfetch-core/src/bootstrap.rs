//! Startup helpers: configuration loading and service wiring

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tikfetch_providers::{OembedClient, TiklydownClient, TikwmClient};

use crate::config::Config;
use crate::direct::{DirectUrlResolver, ProxyUrlResolver};
use crate::error::Error;
use crate::provider::{DownloadChain, DownloadProvider, TiklydownProvider, TikwmProvider};
use crate::video_info::VideoInfoService;

/// Load configuration from a config file or environment variables
///
/// Config file search order:
/// 1. Explicit path (CLI flag or `TIKFETCH_CONFIG_PATH`)
/// 2. ./config.yaml (current working directory)
/// 3. Fall back to environment variables only
pub fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    let config_path = explicit_path
        .map(ToString::to_string)
        .filter(|p| Path::new(p).exists())
        .or_else(|| {
            let cwd = "config.yaml";
            Path::new(cwd).exists().then(|| cwd.to_string())
        });

    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {path}");
            Config::from_file(&path)?
        }
        None => Config::from_env()?,
    };

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Config validation error: {error}");
        }
        return Err(anyhow::anyhow!(
            "Configuration validation failed with {} error(s): {}",
            errors.len(),
            errors.join("; ")
        ));
    }

    Ok(config)
}

/// Request-level services shared by every handler
#[derive(Clone)]
pub struct Services {
    pub download_chain: Arc<DownloadChain>,
    pub video_info: Arc<VideoInfoService>,
    pub direct_resolver: Arc<dyn DirectUrlResolver>,
}

/// Build upstream clients and the services on top of them.
pub fn init_services(config: &Config) -> crate::Result<Services> {
    let upstream = &config.upstream;
    let timeout = upstream.timeout();

    let tiklydown = TiklydownClient::new(&upstream.tiklydown_base_url, &upstream.user_agent, timeout)
        .map_err(|e| Error::Config(e.to_string()))?;
    let tikwm = TikwmClient::new(&upstream.tikwm_base_url, timeout)
        .map_err(|e| Error::Config(e.to_string()))?;
    let oembed = OembedClient::new(&upstream.oembed_base_url, timeout)
        .map_err(|e| Error::Config(e.to_string()))?;

    // Order matters: the primary is tried first.
    let providers: Vec<Arc<dyn DownloadProvider>> = vec![
        Arc::new(TiklydownProvider::new(tiklydown)),
        Arc::new(TikwmProvider::new(tikwm)),
    ];
    let download_chain = DownloadChain::new(providers);
    tracing::info!(
        providers = ?download_chain.provider_names().collect::<Vec<_>>(),
        timeout_seconds = upstream.timeout_seconds,
        "Download chain initialized"
    );

    Ok(Services {
        download_chain: Arc::new(download_chain),
        video_info: Arc::new(VideoInfoService::new(oembed, upstream.oembed_account.clone())),
        direct_resolver: Arc::new(ProxyUrlResolver::new(&upstream.proxy_base_url)?),
    })
}
