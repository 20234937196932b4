//! Pursuit Arena - a 2D arcade dogfight against homing pursuers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft flight, pursuer steering, tick, spawn)
//! - `config`: Data-driven world and tuning configuration
//! - `input`: Input collaborator (edge-triggered spawn, scripted and demo sources)
//! - `renderer`: Geometry for the render collaborator
//! - `session`: Outer round lifecycle (reset, step until over, repeat)

pub mod config;
pub mod input;
pub mod pilot;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use session::{RoundSummary, Session, SessionReport};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frames (and simulation ticks) per second
    pub const TICK_HZ: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Pursuer-to-craft distance that ends the round (strictly less than)
    pub const COLLISION_RADIUS: f32 = 15.0;

    /// Craft flight model (all rates are per tick)
    pub const CRAFT_MAX_SPEED: f32 = 8.0;
    pub const CRAFT_ACCELERATION: f32 = 0.2;
    pub const CRAFT_TURN_RATE: f32 = 0.05;
    pub const CRAFT_DRAG: f32 = 0.99;

    /// Pursuer steering model (per tick)
    pub const PURSUER_MAX_SPEED: f32 = 10.0;
    pub const PURSUER_ACCELERATION: f32 = 0.5;
    pub const PURSUER_TURN_RATE: f32 = 0.1;

    /// One spawn event launches one pursuer per offset
    pub const SPAWN_OFFSETS: [f32; 3] = [0.0, 50.0, -50.0];

    /// Craft triangle: nose distance, tail distance, tail angle from heading
    pub const CRAFT_NOSE_LENGTH: f32 = 20.0;
    pub const CRAFT_TAIL_LENGTH: f32 = 15.0;
    pub const CRAFT_TAIL_SPREAD: f32 = 2.5;

    /// Pursuer disk radius
    pub const PURSUER_DRAW_RADIUS: f32 = 10.0;
}

/// Wrap an angle into (-π, π]
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid lands on the open end at exactly -π
    if wrapped <= -PI { PI } else { wrapped }
}

/// Signed shortest rotation taking `from` onto `to`, in (-π, π]
#[inline]
pub fn shortest_turn(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Unit vector pointing along a heading (0 rad = +x, positive turns toward +y)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::from_angle(heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_wrap_angle_range() {
        assert_relative_eq!(wrap_angle(0.0), 0.0);
        assert_relative_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(-TAU - 0.5), -0.5, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(3.0 * PI / 2.0), -FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_wrap_angle_half_turn_is_positive() {
        assert_relative_eq!(wrap_angle(PI), PI, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(-PI), PI, epsilon = 1e-5);
    }

    #[test]
    fn test_shortest_turn_crosses_seam() {
        // 170° to -170° is a +20° turn, not -340°
        let turn = shortest_turn(170.0_f32.to_radians(), -170.0_f32.to_radians());
        assert_relative_eq!(turn, 20.0_f32.to_radians(), epsilon = 1e-4);
    }

    #[test]
    fn test_heading_vector() {
        let v = heading_vector(0.0);
        assert_relative_eq!(v.x, 1.0);
        assert_relative_eq!(v.y, 0.0);

        let v = heading_vector(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }
}
