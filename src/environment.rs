//! The simulator seam.
//!
//! Transition and reward dynamics live outside this crate. An
//! [`Environment`] is driven by the sampler as a black box: reset it to get
//! a starting state, then step it with actions until it reports `done`.
use crate::*;

/// The outcome of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    /// State after the step. Meaningless when `done`.
    pub next: S,
    /// Reward earned leaving the previous state.
    pub reward: Utility,
    /// Whether the episode has terminated.
    pub done: bool,
}

impl<S> From<(S, Utility, bool)> for Transition<S> {
    fn from((next, reward, done): (S, Utility, bool)) -> Self {
        Self { next, reward, done }
    }
}

/// An episodic environment.
///
/// # Associated Types
///
/// - `S: State` — What the policy observes
/// - `A` — What the policy emits; opaque to the estimators
///
/// # Contract
///
/// - `reset()` starts a fresh episode and returns its initial state
/// - `step()` is only valid between a `reset()` and a terminal transition;
///   implementations report misuse with [`Violation::NotReset`]
/// - every episode reaches `done` in finitely many steps
/// - `seed()` makes subsequent episodes reproducible
pub trait Environment {
    /// The observable state type.
    type S: State;
    /// The action type.
    type A;

    /// Starts a new episode.
    fn reset(&mut self) -> anyhow::Result<Self::S>;

    /// Applies an action to the live episode.
    fn step(&mut self, action: Self::A) -> anyhow::Result<Transition<Self::S>>;

    /// Reseeds the environment's randomness. Deterministic environments
    /// ignore this.
    fn seed(&mut self, seed: u64) {
        let _ = seed;
    }
}
