//! Speed-scaled delays.
//!
//! Every artificial delay is multiplied by `(100 - speed) / 100`, so speed 100
//! removes pacing entirely and speed 0 applies the full base delay.

use std::fmt;
use std::time::Duration;

use game_core::Action;

/// Playback speed as a percentage in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    pub const MAX: Self = Self(100);

    /// Builds a speed, clamping values above 100.
    pub fn new(percent: u32) -> Self {
        Self(percent.min(100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn scale(self, base: Duration) -> Duration {
        base * u32::from(100 - self.0) / 100
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Base delays before speed scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingConfig {
    /// Pause before answering a forward step.
    pub forward_delay: Duration,
    /// Pause before answering turns and collects.
    pub action_delay: Duration,
    /// Time between arming a teleport and arriving.
    pub teleport_delay: Duration,
}

impl PacingConfig {
    /// No artificial delays at any speed.
    pub const INSTANT: Self = Self {
        forward_delay: Duration::ZERO,
        action_delay: Duration::ZERO,
        teleport_delay: Duration::ZERO,
    };

    pub fn response_delay(&self, action: Action, speed: Speed) -> Duration {
        let base = if action.is_forward() {
            self.forward_delay
        } else {
            self.action_delay
        };
        speed.scale(base)
    }

    pub fn teleport_delay(&self, speed: Speed) -> Duration {
        speed.scale(self.teleport_delay)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            forward_delay: Duration::from_millis(2000),
            action_delay: Duration::from_millis(1000),
            teleport_delay: Duration::from_millis(2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_speed_removes_delays() {
        let pacing = PacingConfig::default();
        assert_eq!(
            pacing.response_delay(Action::Forward, Speed::MAX),
            Duration::ZERO
        );
        assert_eq!(pacing.teleport_delay(Speed::MAX), Duration::ZERO);
    }

    #[test]
    fn forward_waits_longer_than_turns() {
        let pacing = PacingConfig::default();
        let half = Speed::new(50);
        assert_eq!(
            pacing.response_delay(Action::Forward, half),
            Duration::from_millis(1000)
        );
        assert_eq!(
            pacing.response_delay(Action::TurnLeft, half),
            Duration::from_millis(500)
        );
        assert_eq!(
            pacing.response_delay(Action::CollectRed, Speed::new(0)),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(Speed::new(250), Speed::MAX);
        assert_eq!(Speed::new(30).to_string(), "30%");
    }
}
