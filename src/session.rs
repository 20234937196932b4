//! Round lifecycle
//!
//! Reset, step until a pursuer connects, record the round, reset again.
//! Runs until the input source quits or a configured limit is reached.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::input::{InputLatch, InputSource};
use crate::renderer::RenderSink;
use crate::sim::{GameEvent, GameState, TickObserver, tick};

/// Why a round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A pursuer reached the craft
    Caught { by: u32 },
    /// The per-round tick limit ran out
    TickLimit,
    /// The input source asked to quit
    Quit,
}

/// One finished round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub ticks: u64,
    pub pursuers_spawned: u32,
    pub live_at_end: usize,
    pub outcome: RoundOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub rounds: Vec<RoundSummary>,
}

impl SessionReport {
    pub fn total_ticks(&self) -> u64 {
        self.rounds.iter().map(|r| r.ticks).sum()
    }

    pub fn longest_round(&self) -> Option<&RoundSummary> {
        self.rounds.iter().max_by_key(|r| r.ticks)
    }
}

/// Optional stopping points for unattended runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_rounds: Option<u32>,
    pub max_ticks_per_round: Option<u64>,
}

/// Owns the current round and drives it
pub struct Session {
    config: SimConfig,
    state: GameState,
    limits: SessionLimits,
    // Spans rounds: a key still held from the last round is not a new press
    latch: InputLatch,
    round: u32,
}

impl Session {
    pub fn new(config: SimConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            limits: SessionLimits::default(),
            latch: InputLatch::default(),
            round: 0,
        }
    }

    pub fn with_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rounds started so far
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Start a fresh round
    pub fn reset(&mut self, observer: &mut impl TickObserver) {
        self.state.reset(&self.config);
        self.round += 1;
        observer.on_event(0, &GameEvent::RoundStarted);
    }

    /// Run rounds back to back until quit or a limit is hit
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl RenderSink,
        observer: &mut impl TickObserver,
    ) -> SessionReport {
        let mut report = SessionReport::default();

        loop {
            self.reset(observer);
            let outcome = self.play_round(input, renderer, observer);
            let summary = self.summarize(outcome);
            log::info!(
                "Round {} ended after {} ticks ({:?}, {} pursuers launched)",
                summary.round,
                summary.ticks,
                summary.outcome,
                summary.pursuers_spawned
            );
            report.rounds.push(summary);

            if outcome == RoundOutcome::Quit {
                break;
            }
            if self.limits.max_rounds.is_some_and(|max| self.round >= max) {
                break;
            }
        }

        report
    }

    fn play_round(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl RenderSink,
        observer: &mut impl TickObserver,
    ) -> RoundOutcome {
        while !self.state.is_over() {
            if self
                .limits
                .max_ticks_per_round
                .is_some_and(|max| self.state.time_ticks >= max)
            {
                return RoundOutcome::TickLimit;
            }

            let controls = match input.poll(&self.state) {
                Some(controls) if !controls.quit => controls,
                _ => return RoundOutcome::Quit,
            };
            let tick_input = self.latch.sample(&controls);
            tick(&mut self.state, &tick_input, &self.config, observer);
            renderer.draw(&self.state);
        }

        match self.state.hit_by {
            Some(by) => RoundOutcome::Caught { by },
            None => RoundOutcome::Quit,
        }
    }

    fn summarize(&self, outcome: RoundOutcome) -> RoundSummary {
        RoundSummary {
            round: self.round,
            ticks: self.state.time_ticks,
            pursuers_spawned: self.state.spawned,
            live_at_end: self.state.pursuers.len(),
            outcome,
        }
    }
}
