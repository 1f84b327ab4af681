//! Fixed policies.
use crate::*;

/// A fixed map from observed state to action.
///
/// Policies hold no learning state; evaluation never changes them.
/// Any `Fn(&S) -> A` closure is a policy, so callers rarely need to name
/// a type for one.
pub trait Policy<S, A> {
    /// Chooses the action to take in `state`.
    fn act(&self, state: &S) -> A;
}

impl<S, A, F> Policy<S, A> for F
where
    F: Fn(&S) -> A,
{
    fn act(&self, state: &S) -> A {
        self(state)
    }
}

/// Stick once the player's total reaches a threshold, hit otherwise.
///
/// The dealer's card and the usable ace play no part in the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(u8);

impl Threshold {
    pub fn new(stick: u8) -> Self {
        Self(stick)
    }
    pub fn stick(&self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(STICK_THRESHOLD)
    }
}

impl Policy<Hand, Decision> for Threshold {
    fn act(&self, hand: &Hand) -> Decision {
        if hand.total() >= self.0 {
            Decision::Stick
        } else {
            Decision::Hit
        }
    }
}
