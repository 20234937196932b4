//! Input collaborator
//!
//! Sources report held key levels once per frame. [`InputLatch`] turns them
//! into a [`TickInput`], firing spawn only on the press edge so a held key
//! launches one batch, not one per frame.

use crate::sim::{GameState, TickInput};

/// Raw held state of every logical action for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub spawn: bool,
    pub quit: bool,
}

/// Rising-edge detector for a level signal
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    /// True only on the first sample after the signal goes down
    pub fn fire(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }

    pub fn reset(&mut self) {
        self.was_down = false;
    }
}

/// Converts per-frame control levels into tick input
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    spawn: EdgeTrigger,
}

impl InputLatch {
    pub fn sample(&mut self, controls: &ControlState) -> TickInput {
        TickInput {
            turn_left: controls.turn_left,
            turn_right: controls.turn_right,
            accelerate: controls.accelerate,
            spawn: self.spawn.fire(controls.spawn),
        }
    }
}

/// Something that can be polled for controls once per frame
pub trait InputSource {
    /// Non-blocking. `None` means the source is exhausted and the session should stop.
    fn poll(&mut self, view: &GameState) -> Option<ControlState>;
}

/// Replays a fixed list of frames, then reports exhaustion
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<ControlState>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<ControlState>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Same controls held for `n` frames
    pub fn repeat(controls: ControlState, n: usize) -> Self {
        Self::new(vec![controls; n])
    }

    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _view: &GameState) -> Option<ControlState> {
        let frame = self.frames.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_fires_once_per_press() {
        let mut edge = EdgeTrigger::default();
        let fired: Vec<bool> = [false, true, true, true, false, true]
            .into_iter()
            .map(|down| edge.fire(down))
            .collect();
        assert_eq!(fired, vec![false, true, false, false, false, true]);
    }

    #[test]
    fn test_latch_passes_levels_through() {
        let mut latch = InputLatch::default();
        let held = ControlState {
            turn_left: true,
            accelerate: true,
            spawn: true,
            ..Default::default()
        };
        let first = latch.sample(&held);
        assert!(first.turn_left && first.accelerate && first.spawn);
        let second = latch.sample(&held);
        assert!(second.turn_left && second.accelerate);
        assert!(!second.spawn);
    }

    #[test]
    fn test_scripted_input_exhausts() {
        let state = GameState::new(&crate::SimConfig::default());
        let mut input = ScriptedInput::repeat(ControlState::default(), 2);
        assert!(input.poll(&state).is_some());
        assert_eq!(input.remaining(), 1);
        assert!(input.poll(&state).is_some());
        assert!(input.poll(&state).is_none());
    }
}
