//! Declarative virtual-user ramp profile.
//!
//! The original scenario configuration ramps virtual users through staged
//! targets. Goose drives a linear ramp (`--startup-time` to `--users`, held
//! for `--run-time`), so the profile exposes the derived arithmetic - peak
//! user count, time to reach it, total duration - used to configure the
//! attack. The staged shape itself stays declarative and testable.

use std::time::Duration;

/// One stage of a ramp: hold course toward `target_users` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampStage {
    /// Virtual-user count to reach by the end of the stage.
    pub target_users: usize,
    /// Stage length.
    pub duration: Duration,
}

impl RampStage {
    /// A stage ramping to `target_users` over `secs` seconds.
    #[must_use]
    pub const fn new(target_users: usize, secs: u64) -> Self {
        Self {
            target_users,
            duration: Duration::from_secs(secs),
        }
    }
}

/// A staged virtual-user ramp profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampProfile {
    /// Ramp stages, executed in order.
    pub stages: Vec<RampStage>,
    /// Window allowed for in-flight iterations to finish at shutdown.
    pub graceful_stop: Duration,
}

impl RampProfile {
    /// The ramp profile of the login-and-order scenario:
    /// 5 users @ 30s, 15 @ 1m, 10 @ 30s, 0 @ 30s, 30s graceful stop.
    #[must_use]
    pub fn login_and_order() -> Self {
        Self {
            stages: vec![
                RampStage::new(5, 30),
                RampStage::new(15, 60),
                RampStage::new(10, 30),
                RampStage::new(0, 30),
            ],
            graceful_stop: Duration::from_secs(30),
        }
    }

    /// The highest virtual-user target across all stages.
    #[must_use]
    pub fn peak_users(&self) -> usize {
        self.stages
            .iter()
            .map(|s| s.target_users)
            .max()
            .unwrap_or(0)
    }

    /// Time from start until the peak target is first reached.
    #[must_use]
    pub fn time_to_peak(&self) -> Duration {
        let peak = self.peak_users();
        let mut elapsed = Duration::ZERO;
        for stage in &self.stages {
            elapsed += stage.duration;
            if stage.target_users == peak {
                break;
            }
        }
        elapsed
    }

    /// Total scheduled duration across all stages.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|s| s.duration).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_and_order_peak() {
        let profile = RampProfile::login_and_order();
        assert_eq!(profile.peak_users(), 15);
    }

    #[test]
    fn test_login_and_order_time_to_peak() {
        // 30s to 5 users, another 60s to 15
        let profile = RampProfile::login_and_order();
        assert_eq!(profile.time_to_peak(), Duration::from_secs(90));
    }

    #[test]
    fn test_login_and_order_total_duration() {
        let profile = RampProfile::login_and_order();
        assert_eq!(profile.total_duration(), Duration::from_secs(150));
    }

    #[test]
    fn test_empty_profile() {
        let profile = RampProfile {
            stages: vec![],
            graceful_stop: Duration::ZERO,
        };
        assert_eq!(profile.peak_users(), 0);
        assert_eq!(profile.total_duration(), Duration::ZERO);
        assert_eq!(profile.time_to_peak(), Duration::ZERO);
    }

    #[test]
    fn test_time_to_peak_stops_at_first_peak_stage() {
        let profile = RampProfile {
            stages: vec![
                RampStage::new(10, 10),
                RampStage::new(10, 10),
                RampStage::new(0, 10),
            ],
            graceful_stop: Duration::ZERO,
        };
        assert_eq!(profile.time_to_peak(), Duration::from_secs(10));
    }
}
