//! Synthetic environments with values known in closed form.
//!
//! These are fixtures for exercising the estimators, not game simulators.
//!
//! - [`Single`] — one state, one step, fixed reward
//! - [`Chain`] — two-state stochastic chain, seedable
//! - [`Revisit`] — deterministic episode that returns to a state
//! - [`Endless`] — never terminates
mod chain;
mod endless;
mod revisit;
mod single;

pub use chain::*;
pub use endless::*;
pub use revisit::*;
pub use single::*;
