//! Readable durations: `5_u64.minutes()`, `2_u64.days()`

use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
const SECS_PER_WEEK: u64 = 7 * SECS_PER_DAY;

/// Unit constructors for whole numbers of time units
///
/// Counts too large to express in seconds saturate at `u64::MAX` seconds
/// rather than wrapping.
pub trait TimeUnits {
    fn seconds(self) -> Duration;
    fn minutes(self) -> Duration;
    fn hours(self) -> Duration;
    fn days(self) -> Duration;
    fn weeks(self) -> Duration;
}

impl TimeUnits for u64 {
    fn seconds(self) -> Duration {
        Duration::from_secs(self)
    }

    fn minutes(self) -> Duration {
        Duration::from_secs(self.saturating_mul(SECS_PER_MINUTE))
    }

    fn hours(self) -> Duration {
        Duration::from_secs(self.saturating_mul(SECS_PER_HOUR))
    }

    fn days(self) -> Duration {
        Duration::from_secs(self.saturating_mul(SECS_PER_DAY))
    }

    fn weeks(self) -> Duration {
        Duration::from_secs(self.saturating_mul(SECS_PER_WEEK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_scale_from_seconds() {
        assert_eq!(90_u64.seconds(), Duration::from_secs(90));
        assert_eq!(2_u64.minutes(), Duration::from_secs(120));
        assert_eq!(3_u64.hours(), Duration::from_secs(10_800));
        assert_eq!(1_u64.days(), Duration::from_secs(86_400));
        assert_eq!(2_u64.weeks(), 14_u64.days());
    }

    #[test]
    fn test_oversized_counts_saturate() {
        let ceiling = Duration::from_secs(u64::MAX);
        assert_eq!((u64::MAX / 10).minutes(), ceiling);
        assert_eq!(u64::MAX.hours(), ceiling);
        assert_eq!(u64::MAX.weeks(), ceiling);

        let whole_days = u64::MAX / SECS_PER_DAY;
        assert_eq!(whole_days.days(), Duration::from_secs(whole_days * SECS_PER_DAY));
    }
}
