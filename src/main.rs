//! Pursuit Arena entry point
//!
//! Headless attract mode: the demo pilot flies rounds against the swarm and
//! a summary is printed as JSON. Windowed play plugs a real input source and
//! renderer into the same `Session`.
//!
//! Usage: `pursuit-arena [config.json]`
//! Env: `PURSUIT_ROUNDS` (default 5), `PURSUIT_SEED`, `PURSUIT_MAX_TICKS` (default 3600)

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use pursuit_arena::{
    SimConfig,
    pilot::DemoPilot,
    renderer::VertexRenderer,
    session::{Session, SessionLimits},
    sim::LogObserver,
};

#[cfg(not(target_arch = "wasm32"))]
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pursuit Arena (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    let seed = env_or("PURSUIT_SEED", 0x5eed_u64);
    let limits = SessionLimits {
        max_rounds: Some(env_or("PURSUIT_ROUNDS", 5)),
        max_ticks_per_round: Some(env_or("PURSUIT_MAX_TICKS", 60 * u64::from(config.tick_hz))),
    };
    log::info!("Demo pilot seed: {seed}, limits: {limits:?}");

    let mut pilot = DemoPilot::new(seed, &config);
    let mut renderer = VertexRenderer::new();
    let mut session = Session::new(config).with_limits(limits);
    let report = session.run(&mut pilot, &mut renderer, &mut LogObserver);

    if let Some(best) = report.longest_round() {
        log::info!("Longest round: #{} survived {} ticks", best.round, best.ticks);
    }
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to encode report: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner in the browser; embed the library behind a web frontend instead
}
