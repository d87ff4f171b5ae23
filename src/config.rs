//! Tolerance and display configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HAMILTON_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hamilton_math::{Quaternion, Vector};

/// Most decimal places a display precision may request
pub const MAX_PRECISION: usize = 17;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MathConfig {
    /// Approximate equality configuration
    #[serde(default)]
    pub equality: EqualityConfig,
    /// Text rendering configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

impl MathConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HAMILTON_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            log::info!("Merging config file {}", default_path.display());
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            log::info!("Merging config file {}", user_path.display());
            figment = figment.merge(Toml::file(&user_path));
        }

        // HAMILTON_EQUALITY__DELTA=1e-10 -> equality.delta = 1e-10
        figment = figment.merge(Env::prefixed("HAMILTON_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delta = self.equality.delta;
        if !delta.is_finite() || delta <= 0.0 {
            log::warn!("Rejected equality delta {}", delta);
            return Err(ConfigError::invalid(format!(
                "equality.delta must be finite and positive, got {}",
                delta
            )));
        }

        if self.display.precision > MAX_PRECISION {
            log::warn!("Rejected display precision {}", self.display.precision);
            return Err(ConfigError::invalid(format!(
                "display.precision must be at most {}, got {}",
                MAX_PRECISION, self.display.precision
            )));
        }

        Ok(())
    }
}

/// Approximate equality configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EqualityConfig {
    /// Tolerance on the squared norm of the difference
    pub delta: f64,
}

impl Default for EqualityConfig {
    fn default() -> Self {
        Self {
            delta: Quaternion::DELTA,
        }
    }
}

impl EqualityConfig {
    /// Compare two quaternions with the configured tolerance
    pub fn equals(&self, a: &Quaternion, b: &Quaternion) -> bool {
        a.approx_eq(b, self.delta)
    }

    /// Compare two vectors with the configured tolerance
    pub fn vectors_equal(&self, a: &Vector, b: &Vector) -> bool {
        (*a - *b).norm_squared() < self.delta
    }
}

/// Text rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl DisplayConfig {
    /// Render a quaternion as `w ± xi ± yj ± zk`
    pub fn render(&self, q: &Quaternion) -> String {
        format!("{:.*}", self.precision, q)
    }

    /// Render a vector as `(x/y/z)`
    pub fn render_vector(&self, v: &Vector) -> String {
        format!("{:.*}", self.precision, v)
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
