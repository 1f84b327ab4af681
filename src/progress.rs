use crate::*;
use std::time::Duration;
use std::time::Instant;

/// Unified trait for evaluation progress across estimators.
///
/// # Required Methods
///
/// - `episodes()` — Number of episodes consumed
/// - `steps()` — Total environment steps across those episodes
/// - `states()` — Distinct states with an estimate
/// - `elapsed()` — Wall-clock duration
///
/// # Provided Methods
///
/// - `format()` — Tabular stats with episodes/sec throughput
/// - `summary()` — Final output with "evaluation stopped" prefix
pub trait Progress {
    /// Number of episodes sampled and absorbed.
    fn episodes(&self) -> usize;
    /// Total environment steps across all episodes.
    fn steps(&self) -> usize;
    /// Distinct states carrying an estimate.
    fn states(&self) -> usize;
    /// Wall-clock duration since evaluation started.
    fn elapsed(&self) -> Duration;
    /// Formats stats as aligned columns with throughput calculation.
    fn format(&self) -> String {
        let rates = self.episodes() as f64 / self.elapsed().as_secs_f64().max(1e-3);
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("episode {}", self.episodes()),
            format!("steps {}", self.steps()),
            format!("states {}", self.states()),
            format!("E/sec {:.1}", rates),
        )
    }
    fn summary(&self) -> String {
        format!("evaluation stopped\n{}", self.format())
    }
}

/// Counts what an estimator has consumed and logs it now and then.
#[derive(Debug, Clone)]
pub struct Meter {
    label: &'static str,
    episodes: usize,
    steps: usize,
    states: usize,
    start: Instant,
    check: Instant,
}

impl Meter {
    pub fn new(label: &'static str, settings: &Evaluation) -> Self {
        log::info!(
            "{} evaluation: {} episodes, gamma {}",
            label,
            settings.episodes,
            settings.gamma
        );
        Self {
            label,
            episodes: 0,
            steps: 0,
            states: 0,
            start: Instant::now(),
            check: Instant::now(),
        }
    }
    /// Records one absorbed episode and the current table size.
    pub fn witness<S>(&mut self, trajectory: &Trajectory<S>, states: usize) {
        self.episodes += 1;
        self.steps += trajectory.len();
        self.states = states;
        if self.check.elapsed() >= LOG_INTERVAL {
            self.check = Instant::now();
            log::debug!("{} {}", self.label, self.format());
        }
    }
    /// Logs the final summary.
    pub fn finish(self) {
        log::info!("{} {}", self.label, self.summary());
    }
}

impl Progress for Meter {
    fn episodes(&self) -> usize {
        self.episodes
    }
    fn steps(&self) -> usize {
        self.steps
    }
    fn states(&self) -> usize {
        self.states
    }
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_episodes_and_steps() {
        let mut meter = Meter::new("test", &Evaluation::default());
        let trajectory = Trajectory::try_from(vec![("a", 0.0), ("b", 1.0)]).unwrap();
        meter.witness(&trajectory, 2);
        meter.witness(&trajectory, 2);
        assert_eq!(meter.episodes(), 2);
        assert_eq!(meter.steps(), 4);
        assert_eq!(meter.states(), 2);
        assert!(meter.format().starts_with("episode 2"));
    }
}
