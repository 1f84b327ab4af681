//! One-step temporal-difference policy evaluation.
//!
//! Each visited state is nudged toward a bootstrapped target built from the
//! immediate reward and the current estimate of its successor:
//!
//! ```text
//! target = r + γ·V(s')        (V(s') = 0 past the last step)
//! V(s)  ← V(s) + α·(target − V(s))
//! ```
//!
//! Updates land one at a time. A later step in the same episode, or any
//! later episode, reads the table as already updated.
use crate::*;

/// TD(0) estimator with a constant step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalDifference {
    alpha: Rate,
}

impl Default for TemporalDifference {
    fn default() -> Self {
        Self { alpha: ALPHA }
    }
}

impl TemporalDifference {
    /// Rejects step sizes outside `(0, 1]`.
    pub fn new(alpha: Rate) -> Result<Self, Violation> {
        if alpha > 0.0 && alpha <= 1.0 {
            Ok(Self { alpha })
        } else {
            Err(Violation::InvalidParameter(format!(
                "alpha {} outside (0, 1]",
                alpha
            )))
        }
    }
    pub fn alpha(&self) -> Rate {
        self.alpha
    }
    /// Applies the updates of one episode, in order, to `values`.
    pub fn update<S>(&self, values: &mut Values<S>, trajectory: &Trajectory<S>, gamma: Rate)
    where
        S: State,
    {
        for (state, reward, next) in trajectory.transitions() {
            let bootstrap = next.map(|s| values.get(s)).unwrap_or_default();
            let target = reward + gamma * bootstrap;
            let current = values.get(state);
            let updated = current + self.alpha * (target - current);
            log::trace!("{:?} {:+.4} -> {:+.4}", state, current, updated);
            values.set(state.clone(), updated);
        }
    }
}

impl Estimator for TemporalDifference {
    fn evaluate<E, P>(
        &self,
        policy: &P,
        env: &mut E,
        settings: &Evaluation,
    ) -> anyhow::Result<Values<E::S>>
    where
        E: Environment,
        P: Policy<E::S, E::A>,
    {
        crate::estimator::prepare(env, settings)?;
        let mut meter = Meter::new("td(0)", settings);
        let mut values = Values::default();
        for _ in 0..settings.episodes {
            let ref trajectory = sample(env, policy, settings.horizon)?;
            self.update(&mut values, trajectory, settings.gamma);
            meter.witness(trajectory, values.len());
        }
        meter.finish();
        Ok(values)
    }
}
