//! Round state
//!
//! Everything a round owns lives here: the craft, the live pursuers and the
//! bookkeeping needed to reproduce a run tick for tick.

use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::pursuer::Pursuer;
use crate::config::SimConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Running,
    /// A pursuer reached the craft; waiting for reset
    Over,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: RoundPhase,
    /// Ticks advanced this round
    pub time_ticks: u64,
    pub craft: Craft,
    /// Live pursuers (spawn order; order carries no meaning)
    pub pursuers: Vec<Pursuer>,
    /// Pursuers launched this round, including expired ones
    pub spawned: u32,
    /// Pursuer that ended the round
    pub hit_by: Option<u32>,
    next_id: u32,
}

impl GameState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            phase: RoundPhase::Running,
            time_ticks: 0,
            craft: Craft::at_center(config),
            pursuers: Vec::new(),
            spawned: 0,
            hit_by: None,
            next_id: 1,
        }
    }

    /// New craft at world center, no pursuers
    pub fn reset(&mut self, config: &SimConfig) {
        *self = Self::new(config);
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Serialize a frame snapshot
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
