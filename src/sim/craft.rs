//! Player craft inertial flight model

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::TickInput;
use crate::config::{CraftTuning, SimConfig, WorldBounds};
use crate::heading_vector;

/// The player-controlled craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
    /// Heading in radians (unbounded, 0 = +x)
    pub heading: f32,
    /// Scalar speed along heading, world units per tick
    pub speed: f32,
    pub tuning: CraftTuning,
}

impl Craft {
    pub fn new(pos: Vec2, tuning: CraftTuning) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            tuning,
        }
    }

    /// Fresh craft at rest in the middle of the world
    pub fn at_center(config: &SimConfig) -> Self {
        Self::new(config.world.center(), config.craft)
    }

    pub fn velocity(&self) -> Vec2 {
        heading_vector(self.heading) * self.speed
    }

    /// Advance one tick from held controls
    pub fn update(&mut self, input: &TickInput, world: &WorldBounds) {
        let t = &self.tuning;

        // Both turn keys may be held; they cancel
        if input.turn_left {
            self.heading -= t.turn_rate;
        }
        if input.turn_right {
            self.heading += t.turn_rate;
        }

        if input.accelerate {
            self.speed += t.acceleration;
        } else {
            self.speed *= t.drag;
        }
        self.speed = self.speed.clamp(0.0, t.max_speed);

        // Clamp, don't bounce: the craft sticks to the edge with its speed intact
        self.pos = world.clamp(self.pos + self.velocity());
    }
}
