use crate::*;

/// Runtime settings shared by every estimator.
///
/// - `episodes` — how many episodes to sample
/// - `gamma` — discount applied to future rewards, in `[0, 1]`
/// - `horizon` — steps after which an episode counts as non-terminating
/// - `seed` — when set, the environment is reseeded before sampling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub episodes: usize,
    pub gamma: Rate,
    pub horizon: usize,
    pub seed: Option<u64>,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            episodes: EPISODES_SHORT,
            gamma: GAMMA,
            horizon: EPISODE_HORIZON,
            seed: None,
        }
    }
}

impl From<(usize, Rate)> for Evaluation {
    fn from((episodes, gamma): (usize, Rate)) -> Self {
        Self {
            episodes,
            gamma,
            ..Self::default()
        }
    }
}

impl Evaluation {
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn bounded(self, horizon: usize) -> Self {
        Self { horizon, ..self }
    }
    /// Rejects a discount outside `[0, 1]` and a zero horizon.
    pub fn validate(&self) -> Result<(), Violation> {
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(Violation::InvalidParameter(format!(
                "gamma {} outside [0, 1]",
                self.gamma
            )));
        }
        if self.horizon == 0 {
            return Err(Violation::InvalidParameter("horizon of zero steps".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_undiscounted() {
        let settings = Evaluation::default();
        assert_eq!(settings.gamma, 1.0);
        assert_eq!(settings.episodes, EPISODES_SHORT);
        assert_eq!(settings.seed, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_bad_gamma() {
        for gamma in [-0.1, 1.5, Rate::NAN] {
            assert!(matches!(
                Evaluation::from((10, gamma)).validate(),
                Err(Violation::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_horizon() {
        assert!(Evaluation::default().bounded(0).validate().is_err());
    }
}
