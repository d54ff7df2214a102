use anyhow::{Context, bail};
use ggez::glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "game_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub ship: String,
    pub meteor: String,
    pub sound_on: String,
    pub sound_off: String,
    pub pause: String,
    pub resume: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "/space.png".to_string(),
            ship: "/ship.png".to_string(),
            meteor: "/meteor.png".to_string(),
            sound_on: "/sound_on.png".to_string(),
            sound_off: "/sound_off.png".to_string(),
            pause: "/pause.png".to_string(),
            resume: "/resume.png".to_string(),
            music: "/music.ogg".to_string(),
        }
    }
}

/// Screen-space placement of the toggle icons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudLayout {
    pub icon_size: f32,
    pub icon_margin: f32,
    pub timer_font_size: f32,
    pub prompt_font_size: f32,
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            icon_size: 48.0,
            icon_margin: 10.0,
            timer_font_size: 36.0,
            prompt_font_size: 48.0,
        }
    }
}

/// Every tunable of the game, built once at startup and handed to the
/// orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub player_radius: f32,
    /// Units per tick along each active axis.
    pub player_speed: f32,
    pub obstacle_radius: f32,
    pub obstacle_speed: f32,
    pub obstacle_count: usize,
    pub tick_rate: u32,
    /// Fixed seed for obstacle spawning; random when absent.
    pub seed: Option<u64>,
    pub assets: AssetPaths,
    pub hud: HudLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_radius: 25.0,
            player_speed: 5.0,
            obstacle_radius: 25.0,
            obstacle_speed: 2.0,
            obstacle_count: 10,
            tick_rate: 60,
            seed: None,
            assets: AssetPaths::default(),
            hud: HudLayout::default(),
        }
    }
}

impl GameConfig {
    /// Reads `path` if it exists, otherwise falls back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_json(&data)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            bail!("playfield must have a positive size, got {}x{}", self.width, self.height);
        }
        if self.player_radius <= 0.0 || self.obstacle_radius <= 0.0 {
            bail!("radii must be positive");
        }
        if self.player_speed <= 0.0 || self.obstacle_speed <= 0.0 {
            bail!("speeds must be positive");
        }
        if self.tick_rate == 0 {
            bail!("tick_rate must be at least 1");
        }
        let diameter = self.obstacle_radius.max(self.player_radius) * 2.0;
        if diameter >= self.width || diameter >= self.height {
            bail!(
                "playfield {}x{} is too small for entities of diameter {}",
                self.width,
                self.height,
                diameter
            );
        }
        Ok(())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_arcade_layout() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.obstacle_count, 10);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = GameConfig::from_json(r#"{ "obstacle_count": 3, "seed": 7 }"#).unwrap();
        assert_eq!(config.obstacle_count, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player_speed, 5.0);
        assert_eq!(config.assets.ship, "/ship.png");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(GameConfig::from_json(r#"{ "tick_rate": 0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "player_radius": -1.0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "width": 40.0 }"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("definitely/not/here.json").unwrap();
        assert_eq!(config.obstacle_radius, 25.0);
    }
}
