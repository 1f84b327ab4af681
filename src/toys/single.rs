use crate::*;

/// One non-terminal state `"S"` that terminates on the first step with a
/// fixed reward. Its value is that reward under any discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Single {
    reward: Utility,
    live: bool,
}

impl Single {
    pub fn new(reward: Utility) -> Self {
        Self {
            reward,
            live: false,
        }
    }
}

impl Environment for Single {
    type S = &'static str;
    type A = ();
    fn reset(&mut self) -> anyhow::Result<&'static str> {
        self.live = true;
        Ok("S")
    }
    fn step(&mut self, _: ()) -> anyhow::Result<Transition<&'static str>> {
        match std::mem::replace(&mut self.live, false) {
            true => Ok(Transition::from(("S", self.reward, true))),
            false => Err(Violation::NotReset.into()),
        }
    }
}
