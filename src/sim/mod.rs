//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame, rates are per tick)
//! - No process-wide state; configuration is passed in
//! - Diagnostics go through an injected observer, never inline output
//! - No rendering or platform dependencies

pub mod craft;
pub mod events;
pub mod pursuer;
pub mod spawn;
pub mod state;
pub mod tick;

pub use craft::Craft;
pub use events::{EventRecorder, GameEvent, LogObserver, NullObserver, TickObserver};
pub use pursuer::{Pursuer, PursuerColor, Steering};
pub use spawn::spawn_batch;
pub use state::{GameState, RoundPhase};
pub use tick::{TickInput, tick};
