use chrono::{DateTime, Datelike, Months, Utc};
use std::fmt;

/// Calendar-aware difference between two instants.
///
/// Years and months follow civil month arithmetic (adding a month to Jan 31
/// lands on the last day of February), the remainder is split into days,
/// hours, minutes and seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Difference from `from` up to `to`. A `to` before `from` yields zero.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        if to <= from {
            return Self::default();
        }

        let mut months = i64::from(to.year() - from.year()) * 12
            + i64::from(to.month())
            - i64::from(from.month());
        let mut anchor = add_months(from, months);
        while months > 0 && anchor > to {
            months -= 1;
            anchor = add_months(from, months);
        }

        let rest = (to - anchor).num_seconds();

        Self {
            years: months / 12,
            months: months % 12,
            days: rest / 86_400,
            hours: rest % 86_400 / 3_600,
            minutes: rest % 3_600 / 60,
            seconds: rest % 60,
        }
    }

    /// The largest non-zero unit, if any.
    pub fn largest_unit(&self) -> Option<(i64, &'static str)> {
        [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ]
        .into_iter()
        .find(|(n, _)| *n != 0)
    }
}

fn add_months(from: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    u32::try_from(months)
        .ok()
        .and_then(|m| from.checked_add_months(Months::new(m)))
        .unwrap_or(from)
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.largest_unit() {
            Some((1, unit)) => write!(f, "1 {} ago", unit),
            Some((n, unit)) => write!(f, "{} {}s ago", n, unit),
            None => write!(f, "just now"),
        }
    }
}
