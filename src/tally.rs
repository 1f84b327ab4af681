use crate::*;
use std::collections::BTreeMap;

/// Per-state visit counts and return sums for Monte-Carlo averaging.
///
/// Scoped to a single evaluation. A tally only ever grows, and two tallies
/// built from disjoint episodes merge by summing, which is how partitioned
/// sampling is aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<S>
where
    S: State,
{
    encounters: BTreeMap<S, (u64, Utility)>,
}

impl<S> Default for Tally<S>
where
    S: State,
{
    fn default() -> Self {
        Self {
            encounters: BTreeMap::new(),
        }
    }
}

impl<S> Tally<S>
where
    S: State,
{
    /// Adds one return observed at `state`.
    pub fn witness(&mut self, state: &S, gain: Utility) {
        let (n, g) = self.encounters.entry(state.clone()).or_insert((0, 0.0));
        *n += 1;
        *g += gain;
    }
    /// Adds the returns of one episode, positions chosen by `V`.
    pub fn absorb<V>(&mut self, trajectory: &Trajectory<S>, gamma: Rate)
    where
        V: VisitSchedule,
    {
        let returns = trajectory.returns(gamma);
        for i in V::visits(trajectory) {
            self.witness(&trajectory.steps()[i].0, returns[i]);
        }
    }
    /// Folds another tally into this one.
    pub fn merge(mut self, other: Self) -> Self {
        for (state, (n, g)) in other.encounters {
            let (count, gains) = self.encounters.entry(state).or_insert((0, 0.0));
            *count += n;
            *gains += g;
        }
        self
    }
    /// Number of contributions recorded at `state`.
    pub fn count(&self, state: &S) -> u64 {
        self.encounters
            .get(state)
            .map(|(n, _)| *n)
            .unwrap_or_default()
    }
    /// Cumulative return recorded at `state`.
    pub fn gains(&self, state: &S) -> Utility {
        self.encounters
            .get(state)
            .map(|(_, g)| *g)
            .unwrap_or_default()
    }
    /// Number of distinct states seen.
    pub fn len(&self) -> usize {
        self.encounters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }
}

/// The sample mean of every tallied state.
impl<S> From<Tally<S>> for Values<S>
where
    S: State,
{
    fn from(tally: Tally<S>) -> Self {
        tally
            .encounters
            .into_iter()
            .map(|(s, (n, g))| (s, g / n as Utility))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_mean() {
        let mut tally = Tally::default();
        tally.witness(&"s", 1.0);
        tally.witness(&"s", 0.0);
        tally.witness(&"s", 2.0);
        assert_eq!(tally.count(&"s"), 3);
        assert_eq!(tally.gains(&"s"), 3.0);
        assert_eq!(Values::from(tally).get(&"s"), 1.0);
    }

    #[test]
    fn merge_sums_partials() {
        let mut a = Tally::default();
        let mut b = Tally::default();
        a.witness(&"s", 1.0);
        b.witness(&"s", 3.0);
        b.witness(&"t", -1.0);
        let merged = a.merge(b);
        assert_eq!(merged.count(&"s"), 2);
        assert_eq!(merged.gains(&"s"), 4.0);
        assert_eq!(merged.count(&"t"), 1);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn unseen_states_are_zero() {
        let tally = Tally::<&str>::default();
        assert!(tally.is_empty());
        assert_eq!(tally.count(&"nowhere"), 0);
        assert_eq!(tally.gains(&"nowhere"), 0.0);
    }
}
