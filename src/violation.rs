/// Contract breaches that make an evaluation run meaningless.
///
/// None of these are retried. An estimator that meets one stops and hands
/// it back through `anyhow`.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The policy chose an action the environment cannot accept.
    InvalidAction(String),
    /// `step` called before `reset`, or after the episode already ended.
    NotReset,
    /// Episode ran past the step horizon without terminating.
    Unterminated { horizon: usize },
    /// A trajectory was assembled from zero steps.
    EmptyEpisode,
    /// A rate parameter is out of its admissible range.
    InvalidParameter(String),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction(s) => write!(f, "invalid action: {}", s),
            Self::NotReset => write!(f, "environment stepped without a live episode"),
            Self::Unterminated { horizon } => {
                write!(f, "episode did not terminate within {} steps", horizon)
            }
            Self::EmptyEpisode => write!(f, "episode has no steps"),
            Self::InvalidParameter(s) => write!(f, "invalid parameter: {}", s),
        }
    }
}

impl std::error::Error for Violation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcasts_through_anyhow() {
        let error = anyhow::Error::from(Violation::Unterminated { horizon: 8 });
        assert_eq!(
            error.downcast_ref::<Violation>(),
            Some(&Violation::Unterminated { horizon: 8 })
        );
        assert_eq!(error.to_string(), "episode did not terminate within 8 steps");
    }
}
