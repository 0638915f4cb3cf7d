//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::time::Duration;

pub const DEFAULT_CATALOG_SOURCE: &str = "data.json";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ROTATION_PERIOD_SECS: u64 = 7;
pub const DEFAULT_CHECKOUT_RESET_SECS: u64 = 4;

fn var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn secs_var(name: &str, default: u64) -> anyhow::Result<Duration> {
    let secs = match var(name) {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("{} must be a whole number of seconds, got '{}'", name, v))?,
        None => default,
    };
    Ok(Duration::from_secs(secs.max(1)))
}

/// Where the catalog JSON lives: an `http(s)://` URL or a local file path.
pub fn catalog_source() -> String {
    var("CATALOG_SOURCE").unwrap_or_else(|| DEFAULT_CATALOG_SOURCE.to_string())
}

/// API key for the design-suggestion service (optional).
///
/// `GEMINI_API_KEY` wins over the legacy `API_KEY`.
pub fn gemini_api_key() -> Option<String> {
    var("GEMINI_API_KEY").or_else(|| var("API_KEY"))
}

pub fn gemini_model() -> String {
    var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string())
}

pub fn gemini_base_url() -> String {
    var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
}

pub fn listen_addr() -> String {
    var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
}

/// Period of both carousel timers.
pub fn rotation_period() -> anyhow::Result<Duration> {
    secs_var("ROTATION_PERIOD_SECS", DEFAULT_ROTATION_PERIOD_SECS)
}

/// Delay before the checkout success banner clears.
pub fn checkout_reset_delay() -> anyhow::Result<Duration> {
    secs_var("CHECKOUT_RESET_SECS", DEFAULT_CHECKOUT_RESET_SECS)
}

/// Runtime knobs for the storefront service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_source: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub listen_addr: String,
    pub rotation_period: Duration,
    pub checkout_reset_delay: Duration,
}

impl StorefrontConfig {
    /// Reads the environment (after loading `.env`, if any).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            catalog_source: catalog_source(),
            gemini_api_key: gemini_api_key(),
            gemini_model: gemini_model(),
            gemini_base_url: gemini_base_url(),
            listen_addr: listen_addr(),
            rotation_period: rotation_period()?,
            checkout_reset_delay: checkout_reset_delay()?,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_source: DEFAULT_CATALOG_SOURCE.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            rotation_period: Duration::from_secs(DEFAULT_ROTATION_PERIOD_SECS),
            checkout_reset_delay: Duration::from_secs(DEFAULT_CHECKOUT_RESET_SECS),
        }
    }
}
