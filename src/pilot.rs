//! Demo pilot - flies the craft on its own for attract mode and headless runs
//!
//! Seeded so a demo session replays identically for the same seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::input::{ControlState, InputSource};
use crate::shortest_turn;
use crate::sim::GameState;

/// Distance from a wall at which the pilot turns back toward the middle
const WALL_MARGIN: f32 = 80.0;
/// Pursuers closer than this are actively evaded
const THREAT_RANGE: f32 = 250.0;
/// Heading error ignored when deciding to turn
const TURN_DEADBAND: f32 = 0.05;
/// Minimum distance from the spawn point before the pilot launches a batch
const SAFE_SPAWN_DISTANCE: f32 = 120.0;

/// Seeded autopilot producing evasive flight and periodic spawn presses
#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: Pcg32,
    config: SimConfig,
    /// Probability of pressing spawn on any eligible frame
    spawn_chance: f64,
    wander: f32,
    spawn_held: bool,
}

impl DemoPilot {
    pub fn new(seed: u64, config: &SimConfig) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            config: config.clone(),
            spawn_chance: 0.02,
            wander: 0.0,
            spawn_held: false,
        }
    }

    pub fn with_spawn_chance(mut self, chance: f64) -> Self {
        self.spawn_chance = chance.clamp(0.0, 1.0);
        self
    }

    fn desired_heading(&mut self, state: &GameState) -> f32 {
        let craft = &state.craft;
        let world = &self.config.world;
        let near_wall = craft.pos.x < WALL_MARGIN
            || craft.pos.y < WALL_MARGIN
            || craft.pos.x > world.width - WALL_MARGIN
            || craft.pos.y > world.height - WALL_MARGIN;

        if near_wall {
            let home = world.center() - craft.pos;
            return home.y.atan2(home.x);
        }

        let threat = state
            .pursuers
            .iter()
            .map(|p| (p.pos, p.pos.distance(craft.pos)))
            .filter(|&(_, d)| d < THREAT_RANGE)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((pos, _)) = threat {
            let away: Vec2 = craft.pos - pos;
            let jink = self.rng.random_range(-0.4..0.4);
            return away.y.atan2(away.x) + jink;
        }

        self.wander = (self.wander + self.rng.random_range(-0.1..0.1)).clamp(-0.8, 0.8);
        craft.heading + self.wander
    }
}

impl InputSource for DemoPilot {
    fn poll(&mut self, view: &GameState) -> Option<ControlState> {
        let desired = self.desired_heading(view);
        let error = shortest_turn(view.craft.heading, desired);

        // Release for a frame after every press so the edge re-arms
        let clear_of_spawn =
            view.craft.pos.distance(self.config.world.center()) > SAFE_SPAWN_DISTANCE;
        let spawn = !self.spawn_held && clear_of_spawn && self.rng.random_bool(self.spawn_chance);
        self.spawn_held = spawn;

        Some(ControlState {
            turn_left: error < -TURN_DEADBAND,
            turn_right: error > TURN_DEADBAND,
            accelerate: !self.rng.random_bool(0.05),
            spawn,
            quit: false,
        })
    }
}
