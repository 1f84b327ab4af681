use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The two non-terminal states of a [`Chain`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Link {
    A,
    B,
}

/// A two-state chain with fixed rewards and transition probabilities.
///
/// ```text
///        advance, +0            win, +1
///   A ──────────────▶ B ──────────────▶ ⊥
///   │                 │
///   │ 1-advance, -1   │ 1-win, +0
///   ▼                 ▼
///   ⊥                 ⊥
/// ```
///
/// Every episode starts in `A`. Actions are ignored.
#[derive(Debug, Clone)]
pub struct Chain {
    advance: Rate,
    win: Rate,
    rng: SmallRng,
    at: Option<Link>,
}

impl Chain {
    /// Panics unless both probabilities lie in `[0, 1]`.
    pub fn new(advance: Rate, win: Rate) -> Self {
        assert!((0.0..=1.0).contains(&advance), "advance {} ∉ [0, 1]", advance);
        assert!((0.0..=1.0).contains(&win), "win {} ∉ [0, 1]", win);
        Self {
            advance,
            win,
            rng: SmallRng::from_os_rng(),
            at: None,
        }
    }
    /// Closed-form value of `link` under discount `gamma`.
    ///
    /// V(B) = win
    /// V(A) = advance · γ · V(B) − (1 − advance)
    pub fn exact(&self, link: Link, gamma: Rate) -> Utility {
        match link {
            Link::B => self.win,
            Link::A => self.advance * gamma * self.exact(Link::B, gamma) - (1.0 - self.advance),
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new(0.5, 0.75)
    }
}

impl Environment for Chain {
    type S = Link;
    type A = ();
    fn reset(&mut self) -> anyhow::Result<Link> {
        self.at = Some(Link::A);
        Ok(Link::A)
    }
    fn step(&mut self, _: ()) -> anyhow::Result<Transition<Link>> {
        match self.at.take() {
            None => Err(Violation::NotReset.into()),
            Some(Link::A) => match self.rng.random_bool(self.advance) {
                true => {
                    self.at = Some(Link::B);
                    Ok(Transition::from((Link::B, 0.0, false)))
                }
                false => Ok(Transition::from((Link::A, -1.0, true))),
            },
            Some(Link::B) => match self.rng.random_bool(self.win) {
                true => Ok(Transition::from((Link::B, 1.0, true))),
                false => Ok(Transition::from((Link::B, 0.0, true))),
            },
        }
    }
    fn seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}
