//! One sampled episode.
//!
//! A [`Trajectory`] pairs every non-terminal state visited with the reward
//! earned leaving it. The terminal successor is never stored: the last
//! reward is the transition into termination.
use crate::*;

/// Ordered `(state, reward)` pairs of one episode.
///
/// Invariants:
/// - never empty
/// - `rewards[i]` is the reward for the transition out of `states[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    steps: Vec<(S, Utility)>,
}

impl<S> TryFrom<Vec<(S, Utility)>> for Trajectory<S> {
    type Error = Violation;
    fn try_from(steps: Vec<(S, Utility)>) -> Result<Self, Self::Error> {
        match steps.is_empty() {
            true => Err(Violation::EmptyEpisode),
            false => Ok(Self { steps }),
        }
    }
}

impl<S> Trajectory<S> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn steps(&self) -> &[(S, Utility)] {
        &self.steps
    }
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.steps.iter().map(|(s, _)| s)
    }
    pub fn rewards(&self) -> impl Iterator<Item = Utility> + '_ {
        self.steps.iter().map(|(_, r)| *r)
    }
    /// State visited after position `i`, or `None` past the last step.
    pub fn successor(&self, i: usize) -> Option<&S> {
        self.steps.get(i + 1).map(|(s, _)| s)
    }
    /// Each step with its successor: `(state, reward, next)`.
    /// `next` is `None` at the final, terminating step.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, Utility, Option<&S>)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, (s, r))| (s, *r, self.successor(i)))
    }
    /// Discounted return-to-go at every position.
    ///
    /// G_last = r_last, G_i = r_i + γ·G_{i+1}
    pub fn returns(&self, gamma: Rate) -> Vec<Utility> {
        let mut returns = self
            .steps
            .iter()
            .rev()
            .scan(0.0, |g: &mut Utility, (_, r)| {
                *g = *r + gamma * *g;
                Some(*g)
            })
            .collect::<Vec<Utility>>();
        returns.reverse();
        returns
    }
    /// Undiscounted sum of every reward in the episode.
    pub fn total(&self) -> Utility {
        self.rewards().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode() -> Trajectory<&'static str> {
        Trajectory::try_from(vec![("a", 1.0), ("b", 0.0), ("a", 2.0)]).unwrap()
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Trajectory::<&str>::try_from(vec![]),
            Err(Violation::EmptyEpisode)
        );
    }

    #[test]
    fn undiscounted_returns() {
        assert_eq!(episode().returns(1.0), vec![3.0, 2.0, 2.0]);
        assert_eq!(episode().total(), 3.0);
    }

    #[test]
    fn discounted_returns() {
        // 2.0 · 0.5² + 0.0 · 0.5 + 1.0
        assert_eq!(episode().returns(0.5), vec![1.5, 1.0, 2.0]);
    }

    #[test]
    fn zero_discount_is_immediate_reward() {
        assert_eq!(episode().returns(0.0), vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn successors_end_at_terminal() {
        let ref episode = episode();
        let transitions = episode.transitions().collect::<Vec<_>>();
        assert_eq!(transitions[0], (&"a", 1.0, Some(&"b")));
        assert_eq!(transitions[1], (&"b", 0.0, Some(&"a")));
        assert_eq!(transitions[2], (&"a", 2.0, None));
    }
}
