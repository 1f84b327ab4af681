use crate::*;

/// Loops on state `"E"` forever with zero reward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Endless {
    live: bool,
}

impl Environment for Endless {
    type S = &'static str;
    type A = ();
    fn reset(&mut self) -> anyhow::Result<&'static str> {
        self.live = true;
        Ok("E")
    }
    fn step(&mut self, _: ()) -> anyhow::Result<Transition<&'static str>> {
        match self.live {
            true => Ok(Transition::from(("E", 0.0, false))),
            false => Err(Violation::NotReset.into()),
        }
    }
}
