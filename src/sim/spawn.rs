//! Spawn policy: one batch of pursuers per spawn event
//!
//! A batch launches one pursuer per configured prediction offset, all from
//! the world center regardless of where the craft is. Batches are atomic:
//! with a cap configured, a batch that would overflow it is refused whole.

use super::events::{GameEvent, TickObserver};
use super::pursuer::Pursuer;
use super::state::GameState;
use crate::config::SimConfig;

/// Launch one batch. Returns how many pursuers were added.
pub fn spawn_batch(
    state: &mut GameState,
    config: &SimConfig,
    observer: &mut impl TickObserver,
) -> usize {
    let batch = config.spawn_offsets.len();
    if let Some(cap) = config.max_pursuers {
        let live = state.pursuers.len();
        if live + batch > cap {
            observer.on_event(state.time_ticks, &GameEvent::SpawnRejected { live, cap });
            return 0;
        }
    }

    let source = config.world.center();
    for &offset in &config.spawn_offsets {
        let id = state.next_entity_id();
        let pursuer = Pursuer::new(id, source, config.pursuer, offset);
        observer.on_event(
            state.time_ticks,
            &GameEvent::PursuerSpawned {
                id,
                pos: source,
                prediction_offset: offset,
            },
        );
        state.pursuers.push(pursuer);
    }
    state.spawned += batch as u32;
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::events::{EventRecorder, NullObserver};
    use crate::sim::pursuer::PursuerColor;
    use glam::Vec2;

    #[test]
    fn test_batch_layout() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        state.craft.pos = Vec2::new(50.0, 700.0);

        assert_eq!(spawn_batch(&mut state, &config, &mut NullObserver), 3);
        let offsets: Vec<f32> = state.pursuers.iter().map(|p| p.prediction_offset).collect();
        assert_eq!(offsets, vec![0.0, 50.0, -50.0]);
        assert!(state.pursuers.iter().all(|p| p.pos == Vec2::new(400.0, 400.0)));
        assert!(state.pursuers.iter().all(|p| p.tuning.max_speed == 10.0));
        assert_eq!(state.pursuers[0].color, PursuerColor::Red);
        assert_eq!(state.pursuers[1].color, PursuerColor::Yellow);
        assert_eq!(state.spawned, 3);
    }

    #[test]
    fn test_unbounded_by_default() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        for _ in 0..100 {
            spawn_batch(&mut state, &config, &mut NullObserver);
        }
        assert_eq!(state.pursuers.len(), 300);
    }

    #[test]
    fn test_cap_refuses_whole_batch() {
        let config = SimConfig {
            max_pursuers: Some(7),
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        let mut recorder = EventRecorder::new();

        assert_eq!(spawn_batch(&mut state, &config, &mut recorder), 3);
        assert_eq!(spawn_batch(&mut state, &config, &mut recorder), 3);
        assert_eq!(spawn_batch(&mut state, &config, &mut recorder), 0);
        assert_eq!(state.pursuers.len(), 6);
        assert_eq!(
            recorder.count(|e| matches!(e, GameEvent::SpawnRejected { live: 6, cap: 7 })),
            1
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        spawn_batch(&mut state, &config, &mut NullObserver);
        spawn_batch(&mut state, &config, &mut NullObserver);
        let mut ids: Vec<u32> = state.pursuers.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
