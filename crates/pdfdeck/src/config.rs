use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "pdfdeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Audience crossfade duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u32>,

    /// Rotation of the neighbor slides in the presenter deck, degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_angle: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `pdfdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# pdfdeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.fade_ms" => {
                let ms: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid fade_ms: {value}. Must be a number."))?;
                if ms > 10_000 {
                    anyhow::bail!("Invalid fade_ms: {value}. Must be at most 10000.");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .fade_ms = Some(ms);
            }
            "defaults.deck_angle" => {
                let angle: f32 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid deck_angle: {value}. Must be a number.")
                })?;
                if !(0.0..=85.0).contains(&angle) {
                    anyhow::bail!("Invalid deck_angle: {value}. Must be between 0 and 85.");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .deck_angle = Some(angle);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.fade_ms, defaults.deck_angle"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_fade_ms() {
        let mut config = Config::default();
        config.set("defaults.fade_ms", "350").unwrap();
        assert_eq!(config.defaults.unwrap().fade_ms, Some(350));
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.fade_ms", "fast").is_err());
        assert!(config.set("defaults.deck_angle", "120").is_err());
        assert!(config.set("defaults.wobble", "1").is_err());
    }
}
