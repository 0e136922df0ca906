use std::time::Duration;

/// Graduated suspension schedule applied before each attempt.
///
/// The delay is a pure function of how many prior attempts failed: the first
/// two attempts run immediately, then each tier covers two failed attempts,
/// and everything past the table stays at the top tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffSchedule {
    pub short_delay: Duration,
    pub medium_delay: Duration,
    pub long_delay: Duration,
    pub max_delay: Duration,
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self {
            short_delay: Duration::from_secs(1),
            medium_delay: Duration::from_secs(5),
            long_delay: Duration::from_secs(10),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl BackoffSchedule {
    pub fn suspend_time(&self, failed_attempts: u32) -> Duration {
        match failed_attempts {
            0..=1 => Duration::ZERO,
            2..=3 => self.short_delay,
            4..=5 => self.medium_delay,
            6..=7 => self.long_delay,
            _ => self.max_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_values() {
        let schedule = BackoffSchedule::default();

        let expected_ms = [0, 0, 1000, 1000, 5000, 5000, 10000, 10000, 30000, 30000];
        for (failed_attempts, expected) in expected_ms.iter().enumerate() {
            assert_eq!(
                schedule.suspend_time(failed_attempts as u32),
                Duration::from_millis(*expected),
                "wrong delay for {} failed attempts",
                failed_attempts
            );
        }
    }

    #[test]
    fn test_schedule_saturates_at_max_delay() {
        let schedule = BackoffSchedule::default();

        assert_eq!(schedule.suspend_time(10), Duration::from_secs(30));
        assert_eq!(schedule.suspend_time(100), Duration::from_secs(30));
        assert_eq!(schedule.suspend_time(u32::MAX), Duration::from_secs(30));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = BackoffSchedule {
            short_delay: Duration::from_millis(10),
            medium_delay: Duration::from_millis(20),
            long_delay: Duration::from_millis(40),
            max_delay: Duration::from_millis(80),
        };

        assert_eq!(schedule.suspend_time(0), Duration::ZERO);
        assert_eq!(schedule.suspend_time(2), Duration::from_millis(10));
        assert_eq!(schedule.suspend_time(5), Duration::from_millis(20));
        assert_eq!(schedule.suspend_time(7), Duration::from_millis(40));
        assert_eq!(schedule.suspend_time(9), Duration::from_millis(80));
    }
}
