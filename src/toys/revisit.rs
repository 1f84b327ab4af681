use crate::*;

/// A deterministic episode `X → Y → X → ⊥` with rewards `1, 0, 5`.
///
/// The two visits to `X` see different returns-to-go (6 and 5 when
/// undiscounted), which separates first-visit from every-visit averaging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Revisit {
    at: Option<usize>,
}

impl Revisit {
    pub const SCRIPT: [(&'static str, Utility); 3] = [("X", 1.0), ("Y", 0.0), ("X", 5.0)];
}

impl Environment for Revisit {
    type S = &'static str;
    type A = ();
    fn reset(&mut self) -> anyhow::Result<&'static str> {
        self.at = Some(0);
        Ok(Self::SCRIPT[0].0)
    }
    fn step(&mut self, _: ()) -> anyhow::Result<Transition<&'static str>> {
        let i = self.at.take().ok_or(Violation::NotReset)?;
        let reward = Self::SCRIPT[i].1;
        match Self::SCRIPT.get(i + 1) {
            Some((next, _)) => {
                self.at = Some(i + 1);
                Ok(Transition::from((*next, reward, false)))
            }
            None => Ok(Transition::from((Self::SCRIPT[i].0, reward, true))),
        }
    }
}
