//! Client configuration sourced from the environment.

use std::fmt;
use std::time::Duration;

use nytcampfin_api::{Client, ReqwestTransport, BASE_URI, CURRENT_CYCLE, DEFAULT_TIMEOUT};

use crate::cache::{MemoryCache, DEFAULT_TTL};
use crate::error::CampfinError;
use crate::transport::CachedTransport;

pub const API_KEY_VAR: &str = "NYT_CAMPFIN_API_KEY";
pub const CYCLE_VAR: &str = "NYT_CAMPFIN_CYCLE";
pub const BASE_URI_VAR: &str = "NYT_CAMPFIN_BASE_URI";
pub const CACHE_TTL_VAR: &str = "NYT_CAMPFIN_CACHE_TTL_SECS";
pub const DEBUG_VAR: &str = "NYT_CAMPFIN_DEBUG";

/// Everything needed to assemble a cached [`Client`].
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub cycle: u32,
    pub base_uri: String,
    pub cache_ttl: Duration,
    pub timeout: Duration,
    pub debug_urls: bool,
}

impl Config {
    /// Defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            cycle: CURRENT_CYCLE,
            base_uri: BASE_URI.to_string(),
            cache_ttl: DEFAULT_TTL,
            timeout: DEFAULT_TIMEOUT,
            debug_urls: false,
        }
    }

    /// Reads the `NYT_CAMPFIN_*` variables. Only the API key is required.
    pub fn from_env() -> Result<Self, CampfinError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CampfinError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CampfinError::Config(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = Self::new(api_key);

        if let Some(cycle) = lookup(CYCLE_VAR) {
            config.cycle = parse_cycle(&cycle)?;
        }
        if let Some(base_uri) = lookup(BASE_URI_VAR).filter(|b| !b.trim().is_empty()) {
            config.base_uri = base_uri.trim().to_string();
        }
        if let Some(ttl) = lookup(CACHE_TTL_VAR) {
            let secs = ttl.trim().parse::<u64>().map_err(|_| {
                CampfinError::Config(format!(
                    "{} must be a number of seconds, got {:?}",
                    CACHE_TTL_VAR, ttl
                ))
            })?;
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(debug) = lookup(DEBUG_VAR) {
            config.debug_urls = matches!(debug.trim(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    pub fn with_cycle(mut self, cycle: u32) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn with_base_uri(mut self, base_uri: &str) -> Self {
        self.base_uri = base_uri.to_string();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_debug_urls(mut self, enabled: bool) -> Self {
        self.debug_urls = enabled;
        self
    }

    /// Builds a client whose transport caches successful responses for `cache_ttl`.
    pub fn client(&self) -> Result<Client, CampfinError> {
        let transport = CachedTransport::new(
            ReqwestTransport::new(self.timeout)?,
            MemoryCache::new(self.cache_ttl),
        );
        let client = Client::builder(self.api_key.as_str())
            .base_uri(&self.base_uri)
            .cycle(self.cycle)
            .debug_urls(self.debug_urls)
            .transport(transport)
            .build()?;
        Ok(client)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("cycle", &self.cycle)
            .field("base_uri", &self.base_uri)
            .field("cache_ttl", &self.cache_ttl)
            .field("timeout", &self.timeout)
            .field("debug_urls", &self.debug_urls)
            .finish()
    }
}

/// Cycles are even election years.
pub fn parse_cycle(input: &str) -> Result<u32, CampfinError> {
    let cycle = input
        .trim()
        .parse::<u32>()
        .map_err(|_| CampfinError::Config(format!("invalid cycle {:?}", input)))?;
    if cycle < 1980 || cycle % 2 != 0 {
        return Err(CampfinError::Config(format!(
            "cycle must be an even year from 1980 on, got {}",
            cycle
        )));
    }
    Ok(cycle)
}
