use crate::*;

/// A policy-evaluation algorithm.
///
/// Implementors only provide [`Estimator::evaluate`]; the positional
/// [`Estimator::estimate`] form fills in default horizon and leaves the
/// environment's seed alone.
///
/// Each call builds its tables from scratch and returns them, so no state
/// survives between calls. Given a seeded environment, two identical calls
/// return identical values.
pub trait Estimator {
    /// Estimates the value of `policy` in `env` under `settings`.
    fn evaluate<E, P>(
        &self,
        policy: &P,
        env: &mut E,
        settings: &Evaluation,
    ) -> anyhow::Result<Values<E::S>>
    where
        E: Environment,
        P: Policy<E::S, E::A>;

    /// `estimate(policy, environment, num_episodes, gamma) -> V`
    fn estimate<E, P>(
        &self,
        policy: &P,
        env: &mut E,
        episodes: usize,
        gamma: Rate,
    ) -> anyhow::Result<Values<E::S>>
    where
        E: Environment,
        P: Policy<E::S, E::A>,
    {
        self.evaluate(policy, env, &Evaluation::from((episodes, gamma)))
    }
}

/// Validates settings and applies the seed, if any.
pub(crate) fn prepare<E>(env: &mut E, settings: &Evaluation) -> anyhow::Result<()>
where
    E: Environment,
{
    settings.validate()?;
    if let Some(seed) = settings.seed {
        env.seed(seed);
    }
    Ok(())
}
