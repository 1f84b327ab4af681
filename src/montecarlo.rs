//! Monte-Carlo policy evaluation.
//!
//! Sample complete episodes, compute the return-to-go at each position,
//! and average those returns per state. The estimate is unbiased for any
//! sample size and converges as the number of episodes grows.
use crate::*;
use std::marker::PhantomData;

/// Return-averaging estimator, parameterized by visit schedule.
///
/// - `MonteCarlo<FirstVisit>` (the default) averages only the first return
///   observed for each state in each episode
/// - `MonteCarlo<EveryVisit>` averages every occurrence
pub struct MonteCarlo<V = FirstVisit>
where
    V: VisitSchedule,
{
    phantom: PhantomData<fn() -> V>,
}

impl<V> Default for MonteCarlo<V>
where
    V: VisitSchedule,
{
    fn default() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<V> MonteCarlo<V>
where
    V: VisitSchedule,
{
    /// Samples `settings.episodes` episodes into a fresh tally.
    fn tally<E, P>(
        policy: &P,
        env: &mut E,
        settings: &Evaluation,
        meter: &mut Meter,
    ) -> anyhow::Result<Tally<E::S>>
    where
        E: Environment,
        P: Policy<E::S, E::A>,
    {
        let mut tally = Tally::default();
        for _ in 0..settings.episodes {
            let ref trajectory = sample(env, policy, settings.horizon)?;
            tally.absorb::<V>(trajectory, settings.gamma);
            meter.witness(trajectory, tally.len());
        }
        Ok(tally)
    }

    /// Splits the episode budget across `workers` threads.
    ///
    /// Each worker samples from its own clone of `env`, reseeded with
    /// `seed + worker`, into a private tally. Tallies are merged in worker
    /// order, so a fixed seed and worker count always give the same values.
    /// Without a seed in `settings` a random one is drawn.
    #[cfg(feature = "server")]
    pub fn evaluate_parallel<E, P>(
        &self,
        policy: &P,
        env: &E,
        settings: &Evaluation,
        workers: usize,
    ) -> anyhow::Result<Values<E::S>>
    where
        E: Environment + Clone + Sync,
        E::S: Send,
        P: Policy<E::S, E::A> + Sync,
    {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        settings.validate()?;
        let workers = workers.max(1);
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("{} monte carlo across {} workers", V::NAME, workers);
        let tally = (0..workers)
            .into_par_iter()
            .map(|worker| -> anyhow::Result<Tally<E::S>> {
                let share = settings.episodes / workers
                    + usize::from(worker < settings.episodes % workers);
                let local = Evaluation {
                    episodes: share,
                    seed: Some(seed.wrapping_add(worker as u64)),
                    ..*settings
                };
                let mut env = env.clone();
                let mut meter = Meter::new(V::NAME, &local);
                crate::estimator::prepare(&mut env, &local)?;
                let tally = Self::tally(policy, &mut env, &local, &mut meter)?;
                meter.finish();
                Ok(tally)
            })
            .collect::<anyhow::Result<Vec<Tally<E::S>>>>()?
            .into_iter()
            .fold(Tally::default(), Tally::merge);
        Ok(Values::from(tally))
    }
}

impl<V> Estimator for MonteCarlo<V>
where
    V: VisitSchedule,
{
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
        let mut meter = Meter::new(V::NAME, settings);
        let tally = Self::tally(policy, env, settings, &mut meter)?;
        meter.finish();
        Ok(Values::from(tally))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toys::*;

    fn ignore<S>(_: &S) {}

    #[test]
    fn single_step_is_exact() {
        for reward in [1.0, -2.5, 0.0] {
            let ref mut env = Single::new(reward);
            let values = MonteCarlo::<FirstVisit>::default()
                .estimate(&ignore, env, 100, GAMMA)
                .unwrap();
            assert_eq!(values.get(&"S"), reward);
            assert_eq!(values.len(), 1);
        }
    }

    #[test]
    fn first_visit_uses_first_return() {
        let ref mut env = Revisit::default();
        let values = MonteCarlo::<FirstVisit>::default()
            .estimate(&ignore, env, 10, GAMMA)
            .unwrap();
        assert_eq!(values.get(&"X"), 6.0);
        assert_eq!(values.get(&"Y"), 5.0);
    }

    #[test]
    fn every_visit_averages_all_returns() {
        let ref mut env = Revisit::default();
        let values = MonteCarlo::<EveryVisit>::default()
            .estimate(&ignore, env, 10, GAMMA)
            .unwrap();
        assert_eq!(values.get(&"X"), 5.5);
        assert_eq!(values.get(&"Y"), 5.0);
    }

    #[test]
    fn discounting_decays_future_rewards() {
        let ref mut env = Revisit::default();
        let first = MonteCarlo::<FirstVisit>::default()
            .estimate(&ignore, env, 4, 0.5)
            .unwrap();
        let every = MonteCarlo::<EveryVisit>::default()
            .estimate(&ignore, env, 4, 0.5)
            .unwrap();
        assert_eq!(first.get(&"X"), 2.25);
        assert_eq!(first.get(&"Y"), 2.5);
        assert_eq!(every.get(&"X"), 3.625);
    }

    #[test]
    fn converges_on_chain() {
        let ref mut env = Chain::default();
        let settings = Evaluation::from((100_000, GAMMA)).seeded(11);
        let values = MonteCarlo::<FirstVisit>::default()
            .evaluate(&ignore, env, &settings)
            .unwrap();
        for link in [Link::A, Link::B] {
            let error = (values.get(&link) - env.exact(link, GAMMA)).abs();
            assert!(error < 0.05, "{:?}: {:.4} off", link, error);
        }
    }

    #[test]
    fn converges_on_discounted_chain() {
        let ref mut env = Chain::default();
        let settings = Evaluation::from((100_000, 0.9)).seeded(5);
        let values = MonteCarlo::<FirstVisit>::default()
            .evaluate(&ignore, env, &settings)
            .unwrap();
        let error = (values.get(&Link::A) - env.exact(Link::A, 0.9)).abs();
        assert!(error < 0.05, "A: {:.4} off", error);
    }

    #[test]
    fn error_shrinks_with_episodes() {
        let ref mut env = Chain::default();
        let exact = env.exact(Link::A, GAMMA);
        let mut error = |episodes: usize, seed: u64| {
            let settings = Evaluation::from((episodes, GAMMA)).seeded(seed);
            let values = MonteCarlo::<FirstVisit>::default()
                .evaluate(&ignore, env, &settings)
                .unwrap();
            (values.get(&Link::A) - exact).abs()
        };
        let small = (0..16).map(|seed| error(10, seed)).sum::<Utility>() / 16.0;
        let large = error(100_000, 99);
        assert!(large < small, "{:.4} ≥ {:.4}", large, small);
        assert!(large < 0.05);
    }

    #[test]
    fn seeded_runs_are_identical() {
        let ref mut env = Chain::default();
        let settings = Evaluation::from((2_000, GAMMA)).seeded(42);
        let estimator = MonteCarlo::<FirstVisit>::default();
        let a = estimator.evaluate(&ignore, env, &settings).unwrap();
        let b = estimator.evaluate(&ignore, env, &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unseen_states_are_absent() {
        let ref mut env = Chain::new(0.0, 1.0);
        let values = MonteCarlo::<FirstVisit>::default()
            .estimate(&ignore, env, 50, GAMMA)
            .unwrap();
        assert!(values.contains(&Link::A));
        assert!(!values.contains(&Link::B));
        assert_eq!(values.get(&Link::B), 0.0);
        assert_eq!(values.get(&Link::A), -1.0);
    }

    #[test]
    fn zero_episodes_is_empty() {
        let ref mut env = Chain::default();
        let values = MonteCarlo::<FirstVisit>::default()
            .estimate(&ignore, env, 0, GAMMA)
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn endless_episode_aborts() {
        let ref mut env = Endless::default();
        let settings = Evaluation::from((3, GAMMA)).bounded(100);
        let error = MonteCarlo::<FirstVisit>::default()
            .evaluate(&ignore, env, &settings)
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<Violation>(),
            Some(&Violation::Unterminated { horizon: 100 })
        );
    }

    #[test]
    fn rejects_bad_gamma() {
        let ref mut env = Single::new(1.0);
        let result = MonteCarlo::<FirstVisit>::default().estimate(&ignore, env, 10, 2.0);
        assert!(result.is_err());
    }

    #[cfg(feature = "server")]
    #[test]
    fn one_worker_matches_sequential() {
        let ref mut env = Chain::default();
        let settings = Evaluation::from((5_000, GAMMA)).seeded(8);
        let estimator = MonteCarlo::<FirstVisit>::default();
        let parallel = estimator
            .evaluate_parallel(&ignore, &*env, &settings, 1)
            .unwrap();
        let sequential = estimator.evaluate(&ignore, env, &settings).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[cfg(feature = "server")]
    #[test]
    fn parallel_is_deterministic_and_converges() {
        let ref env = Chain::default();
        let settings = Evaluation::from((100_000, GAMMA)).seeded(21);
        let estimator = MonteCarlo::<EveryVisit>::default();
        let a = estimator.evaluate_parallel(&ignore, env, &settings, 4).unwrap();
        let b = estimator.evaluate_parallel(&ignore, env, &settings, 4).unwrap();
        assert_eq!(a, b);
        for link in [Link::A, Link::B] {
            assert!((a.get(&link) - env.exact(link, GAMMA)).abs() < 0.05);
        }
    }
}
