use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::json_store::default_data_dir;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_role_interval_ms")]
    pub role_interval_ms: u64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_particles_enabled")]
    pub particles_enabled: bool,
    #[serde(default = "default_max_particles")]
    pub max_particles: usize,
    #[serde(default = "default_allow_corrections")]
    pub allow_corrections: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "neon".to_string()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_role_interval_ms() -> u64 {
    3000
}
fn default_resize_debounce_ms() -> u64 {
    100
}
fn default_particles_enabled() -> bool {
    true
}
fn default_max_particles() -> usize {
    40
}
fn default_allow_corrections() -> bool {
    false
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            role_interval_ms: default_role_interval_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            particles_enabled: default_particles_enabled(),
            max_particles: default_max_particles(),
            allow_corrections: default_allow_corrections(),
            data_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_toml(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfolio")
            .join("config.toml")
    }

    /// Clamp numeric settings into usable ranges.
    pub fn validate(&mut self) {
        self.tick_rate_ms = self.tick_rate_ms.clamp(10, 1000);
        self.role_interval_ms = self.role_interval_ms.clamp(500, 60_000);
        self.resize_debounce_ms = self.resize_debounce_ms.min(2000);
        self.max_particles = self.max_particles.min(200);
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir(),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.role_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
