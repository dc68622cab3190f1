//! Optional TOML configuration. A missing file is not an error; every
//! value has a built-in default and the command line wins over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnimationConfig {
    #[serde(default)]
    pub particles: Option<usize>,

    #[serde(default)]
    pub link_distance: Option<f64>,

    #[serde(default)]
    pub fps: Option<u16>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Fully-resolved animation parameters for one `folio view` run
#[derive(Debug, Clone, Copy)]
pub struct AnimationSettings {
    pub particles: usize,
    pub link_distance: f64,
    pub fps: u16,
}

impl AnimationSettings {
    pub const DEFAULT_FPS: u16 = 30;

    /// Defaults, overridden by the config file, overridden by flags
    pub fn resolve(
        config: &AnimationConfig,
        particles: Option<usize>,
        link_distance: Option<f64>,
        fps: Option<u16>,
    ) -> Self {
        Self {
            particles: particles
                .or(config.particles)
                .unwrap_or(folio_engine::particles::DEFAULT_COUNT),
            link_distance: link_distance
                .or(config.link_distance)
                .unwrap_or(folio_engine::particles::DEFAULT_LINK_DISTANCE),
            fps: fps.or(config.fps).unwrap_or(Self::DEFAULT_FPS).max(1),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.fps as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert!(config.theme.is_none());
        assert!(config.animation.particles.is_none());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("folio.toml");

        let config = Config {
            theme: Some("aurora".to_string()),
            animation: AnimationConfig {
                particles: Some(40),
                link_distance: Some(18.0),
                fps: Some(24),
            },
        };
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.theme.as_deref(), Some("aurora"));
        assert_eq!(loaded.animation.particles, Some(40));
        assert_eq!(loaded.animation.fps, Some(24));
        Ok(())
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "theme = \"midnight\"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.theme.as_deref(), Some("midnight"));

        let settings = AnimationSettings::resolve(&config.animation, None, None, None);
        assert_eq!(settings.particles, folio_engine::particles::DEFAULT_COUNT);
        assert_eq!(settings.fps, AnimationSettings::DEFAULT_FPS);
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "theme = [not toml")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_flags_win_over_config() {
        let config = AnimationConfig {
            particles: Some(40),
            link_distance: Some(18.0),
            fps: Some(24),
        };
        let settings = AnimationSettings::resolve(&config, Some(10), None, Some(60));
        assert_eq!(settings.particles, 10);
        assert_eq!(settings.link_distance, 18.0);
        assert_eq!(settings.fps, 60);
    }

    #[test]
    fn test_fps_floor_is_one() {
        let settings = AnimationSettings::resolve(&AnimationConfig::default(), None, None, Some(0));
        assert_eq!(settings.fps, 1);
        assert_eq!(settings.frame_interval(), Duration::from_secs(1));
    }
}
