use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use anyhow::{Result, Context};
use log::warn;

use crate::providers::duckduckgo::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::responder::{DEFAULT_WRAP_WIDTH, Phrasebook};

/// Shortest timeout accepted for a web lookup, in seconds
pub const MIN_TIMEOUT_SECS: f64 = 0.1;

/// Main configuration structure for shizu
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Web lookup configuration
    #[serde(default)]
    pub web: WebConfig,

    /// UI display configuration
    #[serde(default)]
    pub ui: UIConfig,

    /// Trigger phrases and canned replies
    #[serde(default)]
    pub phrases: Phrasebook,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Query the instant-answer API by default
    #[serde(default = "default_web_enabled")]
    pub enabled: bool,

    /// Instant-answer endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// User-Agent header sent with every lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound for a whole lookup, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Enable grey/red terminal colors
    #[serde(default = "default_colorful")]
    pub colorful: bool,

    /// Column width for wrapped replies
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

// Default value functions
fn default_web_enabled() -> bool { true }
fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_user_agent() -> String { DEFAULT_USER_AGENT.to_string() }
fn default_timeout_secs() -> f64 { 4.0 }
fn default_colorful() -> bool { true }
fn default_wrap_width() -> usize { DEFAULT_WRAP_WIDTH }

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            enabled: default_web_enabled(),
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        UIConfig {
            colorful: default_colorful(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Load configuration from command line argument or default locations
    pub fn load(config_path: &Option<String>) -> Result<Self> {
        if let Some(path) = config_path {
            let expanded_path = shellexpand::tilde(path);
            return Self::from_file(expanded_path.as_ref());
        }

        let default_paths = [
            "shizu.toml",
            ".shizu.toml",
            "~/.config/shizu/config.toml",
        ];

        for path in default_paths {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                match Self::from_file(expanded_path.as_ref()) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn!("Failed to load config from {}: {:#}", path, e),
                }
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to a file
    #[allow(dead_code)]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Merge with command-line arguments (CLI args take precedence)
    pub fn merge_with_args(&mut self, no_web: bool, no_color: bool, timeout_secs: Option<f64>) {
        if no_web {
            self.web.enabled = false;
        }
        if no_color {
            self.ui.colorful = false;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.web.timeout_secs = timeout_secs;
        }
        self.web.timeout_secs = clamp_timeout(self.web.timeout_secs);
    }

    /// Lookup timeout as a `Duration`, never shorter than `MIN_TIMEOUT_SECS`
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(clamp_timeout(self.web.timeout_secs))
            .unwrap_or_else(|_| Duration::from_secs_f64(default_timeout_secs()))
    }
}

fn clamp_timeout(secs: f64) -> f64 {
    // NaN.max(x) is x
    secs.max(MIN_TIMEOUT_SECS)
}
