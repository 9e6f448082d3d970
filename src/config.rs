//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `SITE_NAME` - Brand name shown in page titles (default: `ScientificSquare`)
//! - `HERO_ROTATION_SECS` - Hero carousel cadence (default: 5, range 1..=3600)
//! - `SHOWCASE_ROTATION_SECS` - Showcase carousel cadence (default: 4, range 1..=3600)
//! - `CONTACT_RESET_SECS` - Delay before the contact form resets (default: 3, range 1..=60)
//!
//! No variable is required.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    pub site_name: String,
    pub hero_rotation_secs: u64,
    pub showcase_rotation_secs: u64,
    /// Seconds the contact confirmation stays up before the blank form returns.
    pub contact_reset_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            site_name: "ScientificSquare".to_string(),
            hero_rotation_secs: 5,
            showcase_rotation_secs: 4,
            contact_reset_secs: 3,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);
        let site_name = env::var("SITE_NAME").unwrap_or(defaults.site_name);

        let hero_rotation_secs = parse_var("HERO_ROTATION_SECS", defaults.hero_rotation_secs)?;
        let showcase_rotation_secs =
            parse_var("SHOWCASE_ROTATION_SECS", defaults.showcase_rotation_secs)?;
        let contact_reset_secs = parse_var("CONTACT_RESET_SECS", defaults.contact_reset_secs)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            site_name,
            hero_rotation_secs,
            showcase_rotation_secs,
            contact_reset_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a rotation cadence is outside 1..=3600 seconds
    /// - the contact reset delay is outside 1..=60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, secs) in [
            ("HERO_ROTATION_SECS", self.hero_rotation_secs),
            ("SHOWCASE_ROTATION_SECS", self.showcase_rotation_secs),
        ] {
            if !(1..=3600).contains(&secs) {
                anyhow::bail!("{name} must be between 1 and 3600, got {secs}");
            }
        }

        if !(1..=60).contains(&self.contact_reset_secs) {
            anyhow::bail!(
                "CONTACT_RESET_SECS must be between 1 and 60, got {}",
                self.contact_reset_secs
            );
        }

        if self.site_name.trim().is_empty() {
            anyhow::bail!("SITE_NAME must not be empty");
        }

        Ok(())
    }

    pub fn hero_rotation(&self) -> Duration {
        Duration::from_secs(self.hero_rotation_secs)
    }

    pub fn showcase_rotation(&self) -> Duration {
        Duration::from_secs(self.showcase_rotation_secs)
    }

    pub fn contact_reset(&self) -> Duration {
        Duration::from_secs(self.contact_reset_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Site name: {}", self.site_name);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rotation: hero {}s, showcase {}s",
            self.hero_rotation_secs,
            self.showcase_rotation_secs
        );
        tracing::info!("  Contact form reset: {}s", self.contact_reset_secs);
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable does not parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
