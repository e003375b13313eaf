//! Game configuration
//!
//! All tunable values of the scene live in one serde struct loaded from
//! `assets/config/game.json`. Every field has a default, so a partial file only
//! overrides what it names and a missing file runs the stock game.

use crate::collision::Aabb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Errors that can occur while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

/// What touching a bomb does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BombRule {
    /// Hide the player and show the game-over screen
    GameOver,
    /// Deduct points and keep playing
    Penalty(u32),
}

impl Default for BombRule {
    fn default() -> Self {
        BombRule::GameOver
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub platforms: PlatformLayout,
    pub stars: StarConfig,
    pub bombs: BombConfig,
    pub audio: AudioConfig,
    pub hud: HudConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            platforms: PlatformLayout::default(),
            stars: StarConfig::default(),
            bombs: BombConfig::default(),
            audio: AudioConfig::default(),
            hud: HudConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub gravity_y: f32,
    /// Draw body outlines on start (toggle in game with B)
    pub debug: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: 1024,
            height: 640,
            gravity_y: 300.0,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub bounce: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    /// Scale added every time a bomb milestone is reached
    pub growth: f32,
    /// Tint colours as 0xRRGGBB, cycled on every star
    pub palette: Vec<u32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            spawn_x: 100.0,
            spawn_y: 450.0,
            frame_width: 32,
            frame_height: 48,
            bounce: 0.2,
            run_speed: 200.0,
            jump_speed: 500.0,
            growth: 0.1,
            palette: vec![
                0xff0000, 0xffa500, 0xffff00, 0x00ff00, 0x0000ff, 0x4b0082, 0xee82ee,
            ],
        }
    }
}

/// A static platform: the base platform image scaled around a centre point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl PlatformConfig {
    /// World-space box of the scaled platform.
    pub fn bounds(&self, base_width: f32, base_height: f32) -> Aabb {
        Aabb::from_center(self.x, self.y, base_width * self.scale, base_height * self.scale)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformLayout {
    pub base_width: f32,
    pub base_height: f32,
    pub platforms: Vec<PlatformConfig>,
}

impl Default for PlatformLayout {
    fn default() -> Self {
        PlatformLayout {
            base_width: 400.0,
            base_height: 32.0,
            platforms: vec![
                // Ground
                PlatformConfig { x: 400.0, y: 570.0, scale: 1.65 },
                PlatformConfig { x: 850.0, y: 400.0, scale: 0.65 },
                PlatformConfig { x: 60.0, y: 275.0, scale: 0.65 },
                PlatformConfig { x: 950.0, y: 150.0, scale: 0.65 },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub width: f32,
    pub height: f32,
    /// Stars dropped when the scene is created
    pub initial_count: usize,
    pub initial_x: f32,
    pub step_x: f32,
    pub bounce_min: f32,
    pub bounce_max: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        StarConfig {
            width: 24.0,
            height: 22.0,
            initial_count: 11,
            initial_x: 12.0,
            step_x: 70.0,
            bounce_min: 0.4,
            bounce_max: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BombConfig {
    pub width: f32,
    pub height: f32,
    pub bounce: f32,
    /// Horizontal launch speed is drawn from [-max_speed_x, max_speed_x]
    pub max_speed_x: i32,
    pub speed_y: f32,
    /// A bomb spawns every this many stars
    pub every: u32,
    pub rule: BombRule,
}

impl Default for BombConfig {
    fn default() -> Self {
        BombConfig {
            width: 14.0,
            height: 14.0,
            bounce: 1.0,
            max_speed_x: 200,
            speed_y: 20.0,
            every: 10,
            rule: BombRule::GameOver,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub coin_volume: f32,
    pub jump_volume: f32,
    pub bomb_volume: f32,
    pub music_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            coin_volume: 0.25,
            jump_volume: 0.25,
            bomb_volume: 0.5,
            music_volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub score_label: String,
    pub score_x: i32,
    pub score_y: i32,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            score_label: "Stars Collected: ".to_string(),
            score_x: 16,
            score_y: 16,
        }
    }
}

impl GameConfig {
    /// Loads and validates a config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, falling back to the built-in defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.display(), e);
                GameConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.width == 0 || self.world.height == 0 {
            return Err(ConfigError::Invalid("world size must be non-zero".to_string()));
        }
        if self.player.palette.is_empty() {
            return Err(ConfigError::Invalid("player palette is empty".to_string()));
        }
        if self.bombs.every == 0 {
            return Err(ConfigError::Invalid("bombs.every must be at least 1".to_string()));
        }
        if self.stars.bounce_min > self.stars.bounce_max {
            return Err(ConfigError::Invalid(format!(
                "star bounce range is inverted ({} > {})",
                self.stars.bounce_min, self.stars.bounce_max
            )));
        }
        if self.bombs.max_speed_x < 0 {
            return Err(ConfigError::Invalid("bombs.max_speed_x must not be negative".to_string()));
        }
        for size in [
            self.player.frame_width as f32,
            self.player.frame_height as f32,
            self.stars.width,
            self.stars.height,
            self.bombs.width,
            self.bombs.height,
        ] {
            if size <= 0.0 {
                return Err(ConfigError::Invalid("sprite sizes must be positive".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let json = r#"{ "world": { "gravity_y": 500.0 }, "bombs": { "rule": { "penalty": 5 } } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.world.gravity_y, 500.0);
        assert_eq!(config.world.width, 1024);
        assert_eq!(config.bombs.rule, BombRule::Penalty(5));
        assert_eq!(config.bombs.every, 10);
        assert_eq!(config.player.palette.len(), 7);
    }

    #[test]
    fn test_game_over_rule_parses_from_string() {
        let config: GameConfig = serde_json::from_str(r#"{ "bombs": { "rule": "game_over" } }"#).unwrap();
        assert_eq!(config.bombs.rule, BombRule::GameOver);
    }

    #[test]
    fn test_validate_rejects_empty_palette() {
        let mut config = GameConfig::default();
        config.player.palette.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_bomb_interval() {
        let mut config = GameConfig::default();
        config.bombs.every = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bounce_range() {
        let mut config = GameConfig::default();
        config.stars.bounce_min = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_platform_bounds_scale_around_centre() {
        let ground = PlatformConfig { x: 400.0, y: 570.0, scale: 1.65 };
        let bounds = ground.bounds(400.0, 32.0);

        assert!((bounds.left() - 70.0).abs() < 1e-3);
        assert!((bounds.right() - 730.0).abs() < 1e-3);
        assert!((bounds.top() - 543.6).abs() < 1e-3);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("does/not/exist.json");
        assert_eq!(config.world.width, 1024);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = GameConfig::load_from_file("assets/config/game.json").unwrap();
        let defaults = GameConfig::default();

        assert_eq!(config.player.palette, defaults.player.palette);
        assert_eq!(config.platforms.platforms, defaults.platforms.platforms);
        assert_eq!(config.bombs.rule, BombRule::GameOver);
        assert_eq!(config.hud.score_label, "Stars Collected: ");
    }
}
