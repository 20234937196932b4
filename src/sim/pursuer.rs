//! Pursuer steering: rate-limited turn toward a lead point on the craft's heading
//!
//! Each tick a pursuer:
//! 1. Projects a lead point `prediction_offset` units along the craft's current
//!    heading (0 = pure pursuit, negative = aim behind)
//! 2. Turns toward it by at most `turn_rate`, snapping once within one step
//! 3. Accelerates toward `max_speed` (pursuers never slow down)
//! 4. Moves along its heading, unclamped

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::craft::Craft;
use crate::config::PursuerTuning;
use crate::{heading_vector, shortest_turn};

/// Display color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuerColor {
    /// Direct chaser (no lead)
    Red,
    /// Predictive chaser (leads or lags the craft)
    Yellow,
}

impl PursuerColor {
    /// Tag used for a given prediction offset
    pub fn for_offset(offset: f32) -> Self {
        if offset == 0.0 {
            PursuerColor::Red
        } else {
            PursuerColor::Yellow
        }
    }
}

/// Steering result for one tick, reported to observers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub lead: Vec2,
    pub desired_heading: f32,
}

/// A homing pursuer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: u32,
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub tuning: PursuerTuning,
    /// Signed distance ahead of the craft along its heading
    pub prediction_offset: f32,
    pub color: PursuerColor,
}

impl Pursuer {
    pub fn new(id: u32, pos: Vec2, tuning: PursuerTuning, prediction_offset: f32) -> Self {
        Self {
            id,
            pos,
            heading: 0.0,
            speed: 0.0,
            tuning,
            prediction_offset,
            color: PursuerColor::for_offset(prediction_offset),
        }
    }

    /// Single-sample lead estimate on the target's current heading
    pub fn lead_point(&self, target: &Craft) -> Vec2 {
        target.pos + heading_vector(target.heading) * self.prediction_offset
    }

    /// Heading from this pursuer toward the lead point
    pub fn desired_heading(&self, target: &Craft) -> f32 {
        let to_lead = self.lead_point(target) - self.pos;
        to_lead.y.atan2(to_lead.x)
    }

    /// Advance one tick chasing `target`
    pub fn update(&mut self, target: &Craft) -> Steering {
        let lead = self.lead_point(target);
        let desired = self.desired_heading(target);

        let turn = shortest_turn(self.heading, desired);
        if turn > self.tuning.turn_rate {
            self.heading += self.tuning.turn_rate;
        } else if turn < -self.tuning.turn_rate {
            self.heading -= self.tuning.turn_rate;
        } else {
            self.heading = desired;
        }

        self.speed = (self.speed + self.tuning.acceleration).min(self.tuning.max_speed);
        self.pos += heading_vector(self.heading) * self.speed;

        Steering {
            lead,
            desired_heading: desired,
        }
    }

    pub fn distance_to(&self, craft: &Craft) -> f32 {
        self.pos.distance(craft.pos)
    }
}
