//! World and tuning configuration
//!
//! Passed explicitly into every constructor and tick. Persisted as JSON;
//! missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Playable rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

impl WorldBounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive containment on both axes
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Component-wise clamp into the rectangle
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}

/// Craft flight model constants (per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub turn_rate: f32,
    /// Multiplicative speed decay applied on every tick without thrust
    pub drag: f32,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            max_speed: CRAFT_MAX_SPEED,
            acceleration: CRAFT_ACCELERATION,
            turn_rate: CRAFT_TURN_RATE,
            drag: CRAFT_DRAG,
        }
    }
}

/// Pursuer steering constants (per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuerTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub turn_rate: f32,
}

impl Default for PursuerTuning {
    fn default() -> Self {
        Self {
            max_speed: PURSUER_MAX_SPEED,
            acceleration: PURSUER_ACCELERATION,
            turn_rate: PURSUER_TURN_RATE,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldBounds,
    pub craft: CraftTuning,
    pub pursuer: PursuerTuning,
    pub collision_radius: f32,
    /// One pursuer per entry is launched on each spawn event
    pub spawn_offsets: Vec<f32>,
    /// Optional cap on live pursuers. `None` keeps spawning unbounded.
    pub max_pursuers: Option<usize>,
    pub tick_hz: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),
            craft: CraftTuning::default(),
            pursuer: PursuerTuning::default(),
            collision_radius: COLLISION_RADIUS,
            spawn_offsets: SPAWN_OFFSETS.to_vec(),
            max_pursuers: None,
            tick_hz: TICK_HZ,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Reject values the flight and steering models are not defined for
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.world.width > 0.0 && self.world.height > 0.0) {
            return invalid("world width and height must be positive");
        }
        if !(self.craft.drag > 0.0 && self.craft.drag < 1.0) {
            return invalid("craft drag must lie in (0, 1)");
        }
        let rates = [
            self.craft.max_speed,
            self.craft.acceleration,
            self.craft.turn_rate,
            self.pursuer.max_speed,
            self.pursuer.acceleration,
            self.pursuer.turn_rate,
        ];
        if rates.iter().any(|r| !(*r >= 0.0)) {
            return invalid("speeds, accelerations and turn rates must be non-negative");
        }
        if !(self.collision_radius > 0.0) {
            return invalid("collision radius must be positive");
        }
        if self.spawn_offsets.iter().any(|o| !o.is_finite()) {
            return invalid("spawn offsets must be finite");
        }
        // Batches are atomic: a cap smaller than one batch refuses every spawn
        if self.max_pursuers.is_some_and(|cap| cap == 0 || cap < self.spawn_offsets.len()) {
            return invalid("max_pursuers must fit at least one spawn batch");
        }
        if self.tick_hz == 0 {
            return invalid("tick rate must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.center(), Vec2::new(400.0, 400.0));
        assert_eq!(config.spawn_offsets, vec![0.0, 50.0, -50.0]);
        assert_eq!(config.max_pursuers, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json_str(r#"{"max_pursuers": 12, "craft": {"max_speed": 6.0}}"#)
            .unwrap();
        assert_eq!(config.max_pursuers, Some(12));
        assert_eq!(config.craft.max_speed, 6.0);
        assert_eq!(config.craft.drag, CRAFT_DRAG);
        assert_eq!(config.world, WorldBounds::default());
    }

    #[test]
    fn test_rejects_bad_drag() {
        let err = SimConfig::from_json_str(r#"{"craft": {"drag": 1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_cap() {
        let err = SimConfig::from_json_str(r#"{"max_pursuers": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_cap_below_batch() {
        for cap in [1, 2] {
            let json = format!(r#"{{"max_pursuers": {cap}}}"#);
            let err = SimConfig::from_json_str(&json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
        }
        let config = SimConfig::from_json_str(r#"{"max_pursuers": 3}"#).unwrap();
        assert_eq!(config.max_pursuers, Some(3));

        // A smaller batch makes a smaller cap usable
        let config =
            SimConfig::from_json_str(r#"{"max_pursuers": 1, "spawn_offsets": [0.0]}"#).unwrap();
        assert_eq!(config.max_pursuers, Some(1));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("pursuit-arena-{}.json", std::process::id()));
        let config = SimConfig {
            max_pursuers: Some(30),
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = SimConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bounds_contains_and_clamp() {
        let world = WorldBounds::default();
        assert!(world.contains(Vec2::new(0.0, 800.0)));
        assert!(!world.contains(Vec2::new(-1.0, 400.0)));
        assert!(!world.contains(Vec2::new(400.0, 800.5)));
        assert_eq!(world.clamp(Vec2::new(-5.0, 900.0)), Vec2::new(0.0, 800.0));
    }
}
