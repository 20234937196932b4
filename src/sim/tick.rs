//! Fixed timestep simulation tick
//!
//! Per tick, in order: spawn batch (if triggered), craft, every pursuer,
//! collision test, expiry prune. Later stages read what earlier ones wrote.

use super::events::{GameEvent, TickObserver};
use super::spawn::spawn_batch;
use super::state::{GameState, RoundPhase};
use crate::config::SimConfig;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: rotate heading negative
    pub turn_left: bool,
    /// Held: rotate heading positive
    pub turn_right: bool,
    /// Held: thrust (drag applies otherwise)
    pub accelerate: bool,
    /// One-shot: launch a spawn batch this tick
    pub spawn: bool,
}

/// Advance the round by one tick. Does nothing once the round is over.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    config: &SimConfig,
    observer: &mut impl TickObserver,
) {
    if state.phase == RoundPhase::Over {
        return;
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    if input.spawn {
        spawn_batch(state, config, observer);
    }

    state.craft.update(input, &config.world);

    for pursuer in &mut state.pursuers {
        let steering = pursuer.update(&state.craft);
        observer.on_event(
            now,
            &GameEvent::PursuerMoved {
                id: pursuer.id,
                pos: pursuer.pos,
                lead: steering.lead,
            },
        );
    }

    // Any contact ends the whole round; the first one found is reported
    let hit = state
        .pursuers
        .iter()
        .map(|p| (p.id, p.distance_to(&state.craft)))
        .find(|&(_, distance)| distance < config.collision_radius);

    // Prune runs regardless of collision
    state.pursuers.retain(|p| {
        let inside = config.world.contains(p.pos);
        if !inside {
            observer.on_event(now, &GameEvent::PursuerExpired { id: p.id, pos: p.pos });
        }
        inside
    });

    if let Some((id, distance)) = hit {
        observer.on_event(now, &GameEvent::Collision { id, distance });
        state.hit_by = Some(id);
        state.phase = RoundPhase::Over;
    }
}
