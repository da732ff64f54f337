//! Countdown arithmetic for the premiere timer.
//!
//! The breakdown is a pure function of `(target, now)` so the view only has to
//! call it from its interval tick.

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// What the countdown shows: time still to go, or the premiere has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Pending(TimeLeft),
    Live,
}

impl Countdown {
    /// Break `target_ms - now_ms` into days/hours/minutes/seconds.
    ///
    /// Anything at or past the target is `Live`; the remainder is never negative.
    pub fn until(target_ms: i64, now_ms: i64) -> Self {
        let distance = target_ms - now_ms;
        if distance <= 0 {
            return Countdown::Live;
        }
        Countdown::Pending(TimeLeft {
            days: (distance / MS_PER_DAY) as u64,
            hours: ((distance % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((distance % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((distance % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        })
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Countdown::Live)
    }

    /// Fields to render; all zero once live.
    pub fn time_left(&self) -> TimeLeft {
        match self {
            Countdown::Pending(left) => *left,
            Countdown::Live => TimeLeft::default(),
        }
    }
}

impl TimeLeft {
    /// Zero-padded `(days, hours, minutes, seconds)` strings as displayed.
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:03}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_each_unit() {
        let now = 1_700_000_000_000;
        let target = now + 90_061 * 1_000;
        assert_eq!(
            Countdown::until(target, now),
            Countdown::Pending(TimeLeft { days: 1, hours: 1, minutes: 1, seconds: 1 })
        );
    }

    #[test]
    fn partial_seconds_are_floored() {
        let left = Countdown::until(1_999, 0).time_left();
        assert_eq!(left.seconds, 1);
        assert_eq!(Countdown::until(999, 0).time_left(), TimeLeft::default());
        assert!(!Countdown::until(999, 0).is_live());
    }

    #[test]
    fn fields_stay_in_range_while_pending() {
        let target = 10_000_000_000;
        for now in (0..target).step_by(97_654_321) {
            let left = Countdown::until(target, now).time_left();
            assert!(left.hours < 24);
            assert!(left.minutes < 60);
            assert!(left.seconds < 60);
        }
    }

    #[test]
    fn past_target_clamps_to_live() {
        assert!(Countdown::until(1_000, 1_000).is_live());
        let past = Countdown::until(1_000, 5_000_000);
        assert!(past.is_live());
        assert_eq!(past.time_left(), TimeLeft::default());
    }

    #[test]
    fn crossing_the_target_stays_live() {
        let target = 10_000;
        let ticks: Vec<bool> = (0..20)
            .map(|i| Countdown::until(target, 5_500 + i * 1_000).is_live())
            .collect();
        let first_live = ticks.iter().position(|&live| live).unwrap();
        assert_eq!(first_live, 5);
        assert!(ticks[..first_live].iter().all(|&live| !live));
        assert!(ticks[first_live..].iter().all(|&live| live));
    }

    #[test]
    fn padding_matches_display() {
        let left = TimeLeft { days: 7, hours: 3, minutes: 0, seconds: 59 };
        assert_eq!(left.padded(), ["007", "03", "00", "59"].map(String::from));
    }
}
