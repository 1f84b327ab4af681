//! Policy evaluation for episodic environments.
//!
//! Given a fixed [`Policy`] and an [`Environment`] that can be reset and
//! stepped, estimate the state-value function of that policy with either
//! first-visit Monte-Carlo return averaging or one-step temporal-difference
//! learning. Nothing here improves the policy.
//!
//! # Module Structure
//!
//! - `environment` — The simulator seam (`reset`, `step`, `seed`)
//! - `policy` — Fixed `State -> Action` maps, including closures
//! - `hand` — Reference card-game state and actions
//! - `trajectory` — One sampled episode of `(state, reward)` pairs
//! - `sampler` — Drives policy against environment into a trajectory
//! - `schedule` — First-visit vs every-visit return accounting
//! - `tally` — Visit counts and return sums for Monte-Carlo
//! - `values` — The estimated value mapping
//! - `montecarlo` — Monte-Carlo estimator
//! - `temporal` — TD(0) estimator
//! - `surface` — Text rendering of a card-game value surface
//! - `progress` — Run observability
//! - `toys` — Small synthetic environments with known values
mod environment;
mod estimator;
mod evaluation;
mod hand;
mod montecarlo;
mod policy;
mod progress;
mod sampler;
mod schedule;
mod state;
mod surface;
mod tally;
mod temporal;
mod trajectory;
mod values;
mod violation;

pub mod toys;

pub use environment::*;
pub use estimator::*;
pub use evaluation::*;
pub use hand::*;
pub use montecarlo::*;
pub use policy::*;
pub use progress::*;
pub use sampler::*;
pub use schedule::*;
pub use state::*;
pub use surface::*;
pub use tally::*;
pub use temporal::*;
pub use trajectory::*;
pub use values::*;
pub use violation::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rewards, returns, and value estimates.
pub type Utility = f64;
/// Step sizes and discount factors.
pub type Rate = f64;

// ============================================================================
// ESTIMATOR PARAMETERS
// ============================================================================
/// Constant TD(0) step size.
pub const ALPHA: Rate = 0.1;
/// Default discount factor. Undiscounted returns.
pub const GAMMA: Rate = 1.0;
/// Steps after which an episode is declared non-terminating.
pub const EPISODE_HORIZON: usize = 1 << 16;

// ============================================================================
// REFERENCE CARD GAME
// Player total, dealer showing card, usable ace.
// ============================================================================
/// Threshold policy sticks at or above this player total.
pub const STICK_THRESHOLD: u8 = 20;

// ============================================================================
// EVALUATION BUDGETS
// ============================================================================
/// Short evaluation run.
pub const EPISODES_SHORT: usize = 10_000;
/// Long evaluation run.
pub const EPISODES_LONG: usize = 500_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Interval between progress log messages during evaluation.
pub const LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
