//! Simulation events and the observers that consume them
//!
//! The tick never logs. It reports what happened to an injected
//! [`TickObserver`]; the binary wires in [`LogObserver`], tests use
//! [`EventRecorder`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Something notable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// State was reset for a new round
    RoundStarted,
    PursuerSpawned {
        id: u32,
        pos: Vec2,
        prediction_offset: f32,
    },
    /// A whole spawn batch was refused by the configured cap
    SpawnRejected { live: usize, cap: usize },
    PursuerMoved { id: u32, pos: Vec2, lead: Vec2 },
    /// A pursuer reached the craft; the round is over
    Collision { id: u32, distance: f32 },
    /// A pursuer left the world and was pruned
    PursuerExpired { id: u32, pos: Vec2 },
}

/// Sink for [`GameEvent`]s emitted by the simulation
pub trait TickObserver {
    fn on_event(&mut self, tick: u64, event: &GameEvent);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl TickObserver for NullObserver {
    fn on_event(&mut self, _tick: u64, _event: &GameEvent) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TickObserver for LogObserver {
    fn on_event(&mut self, tick: u64, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted => log::info!("Round started"),
            GameEvent::PursuerSpawned {
                id,
                pos,
                prediction_offset,
            } => log::info!(
                "[{tick}] Pursuer {id} spawned at ({:.1}, {:.1}) with prediction offset {prediction_offset}",
                pos.x,
                pos.y
            ),
            GameEvent::SpawnRejected { live, cap } => {
                log::warn!("[{tick}] Spawn refused: {live} live pursuers, cap {cap}")
            }
            GameEvent::PursuerMoved { id, pos, lead } => log::trace!(
                "[{tick}] Pursuer {id} at ({:.1}, {:.1}) moving towards ({:.1}, {:.1})",
                pos.x,
                pos.y,
                lead.x,
                lead.y
            ),
            GameEvent::Collision { id, distance } => {
                log::info!("[{tick}] Pursuer {id} hit the craft at distance {distance:.2}")
            }
            GameEvent::PursuerExpired { id, pos } => log::debug!(
                "[{tick}] Pursuer {id} left the world at ({:.1}, {:.1})",
                pos.x,
                pos.y
            ),
        }
    }
}

/// Collects events in order
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    pub events: Vec<(u64, GameEvent)>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|(_, e)| pred(e)).count()
    }
}

impl TickObserver for EventRecorder {
    fn on_event(&mut self, tick: u64, event: &GameEvent) {
        self.events.push((tick, event.clone()));
    }
}

impl<T: TickObserver + ?Sized> TickObserver for &mut T {
    fn on_event(&mut self, tick: u64, event: &GameEvent) {
        (**self).on_event(tick, event);
    }
}
