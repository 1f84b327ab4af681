//! Visit schedules for Monte-Carlo return accounting.
//!
//! A state can occur more than once in an episode. The schedule decides
//! which of those occurrences contribute their return-to-go to the state's
//! average.
//!
//! - [`FirstVisit`] — only the earliest occurrence counts (textbook first-visit MC)
//! - [`EveryVisit`] — every occurrence counts
use crate::*;
use std::collections::BTreeSet;

/// Selects the trajectory positions whose returns are averaged.
pub trait VisitSchedule {
    /// Label used in logs.
    const NAME: &'static str;
    /// Positions of `trajectory` that contribute, in increasing order.
    fn visits<S: State>(trajectory: &Trajectory<S>) -> Vec<usize>;
}

/// Only the first occurrence of each state in an episode contributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVisit;

impl VisitSchedule for FirstVisit {
    const NAME: &'static str = "first-visit";
    fn visits<S: State>(trajectory: &Trajectory<S>) -> Vec<usize> {
        let mut seen = BTreeSet::new();
        trajectory
            .states()
            .enumerate()
            .filter(|(_, s)| seen.insert(*s))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Every occurrence of a state contributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryVisit;

impl VisitSchedule for EveryVisit {
    const NAME: &'static str = "every-visit";
    fn visits<S: State>(trajectory: &Trajectory<S>) -> Vec<usize> {
        (0..trajectory.len()).collect()
    }
}
