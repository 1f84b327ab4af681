//! Episode sampling.
use crate::*;

/// Plays `policy` against `env` for one episode.
///
/// Resets the environment, then alternates `policy.act` and `env.step`
/// until the environment reports termination. Every non-terminal state is
/// recorded alongside the reward for leaving it.
///
/// An episode still running after `horizon` steps is abandoned with
/// [`Violation::Unterminated`]. Errors raised by the environment propagate
/// unchanged.
pub fn sample<E, P>(env: &mut E, policy: &P, horizon: usize) -> anyhow::Result<Trajectory<E::S>>
where
    E: Environment,
    P: Policy<E::S, E::A>,
{
    let mut steps = Vec::new();
    let mut state = env.reset()?;
    loop {
        if steps.len() >= horizon {
            return Err(Violation::Unterminated { horizon }.into());
        }
        let action = policy.act(&state);
        let Transition { next, reward, done } = env.step(action)?;
        log::trace!("{:?} -> {:+.3}", state, reward);
        steps.push((state, reward));
        match done {
            true => break,
            false => state = next,
        }
    }
    Ok(Trajectory::try_from(steps)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toys::*;

    /// Accepts only even actions.
    struct Picky;
    impl Environment for Picky {
        type S = u8;
        type A = u8;
        fn reset(&mut self) -> anyhow::Result<u8> {
            Ok(0)
        }
        fn step(&mut self, action: u8) -> anyhow::Result<Transition<u8>> {
            match action % 2 {
                0 => Ok(Transition::from((action, 1.0, true))),
                _ => Err(Violation::InvalidAction(format!("odd action {}", action)).into()),
            }
        }
    }

    #[test]
    fn states_and_rewards_align() {
        let ref mut env = Revisit::default();
        let trajectory = sample(env, &|_: &&str| (), EPISODE_HORIZON).unwrap();
        assert_eq!(trajectory.states().count(), trajectory.rewards().count());
        assert_eq!(
            trajectory.states().copied().collect::<Vec<_>>(),
            vec!["X", "Y", "X"]
        );
        assert_eq!(trajectory.rewards().collect::<Vec<_>>(), vec![1.0, 0.0, 5.0]);
    }

    #[test]
    fn single_step_episode() {
        let ref mut env = Single::new(1.0);
        let trajectory = sample(env, &|_: &&str| (), EPISODE_HORIZON).unwrap();
        assert_eq!(trajectory.steps(), &[("S", 1.0)]);
    }

    #[test]
    fn horizon_stops_endless_episodes() {
        let ref mut env = Endless::default();
        let error = sample(env, &|_: &&str| (), 32).unwrap_err();
        assert_eq!(
            error.downcast_ref::<Violation>(),
            Some(&Violation::Unterminated { horizon: 32 })
        );
    }

    #[test]
    fn invalid_actions_propagate() {
        let error = sample(&mut Picky, &|_: &u8| 3u8, EPISODE_HORIZON).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Violation>(),
            Some(Violation::InvalidAction(_))
        ));
        assert!(sample(&mut Picky, &|_: &u8| 2u8, EPISODE_HORIZON).is_ok());
    }
}
