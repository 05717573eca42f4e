//! Countdown Timers
//!
//! Remaining time until each row's deadline, redrawn every tick.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::Labels;

pub const DEADLINE_ATTR: &str = "deadline";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// One countdown element
pub trait CountdownCell {
    /// Raw `data-deadline` value
    fn deadline(&self) -> Option<String>;
    fn set_text(&self, text: &str);
    /// Apply the error style. Never reverted.
    fn mark_expired(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Expired,
    Left { days: i64, hours: i64, minutes: i64, seconds: i64 },
}

impl Remaining {
    /// Split a millisecond difference, flooring each unit.
    pub fn from_millis(diff: i64) -> Self {
        if diff < 0 {
            return Remaining::Expired;
        }
        Remaining::Left {
            days: diff / MS_PER_DAY,
            hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn render(&self, labels: &Labels) -> String {
        match self {
            Remaining::Expired => labels.expired.clone(),
            Remaining::Left { days, hours, minutes, seconds } => format!(
                "{}{} {:02}:{:02}:{:02}",
                days, labels.day_suffix, hours, minutes, seconds
            ),
        }
    }
}

/// Parse a deadline the way the server renders it.
///
/// RFC 3339 keeps its offset, a naive date-time is read in `local`, and a bare
/// date is UTC midnight.
pub fn parse_deadline<Tz: TimeZone>(raw: &str, local: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Redraw every cell against `now`. Cells with an unparsable deadline are left as they are.
pub fn render_all<C, Tz>(cells: &[C], now: DateTime<Utc>, local: &Tz, labels: &Labels)
where
    C: CountdownCell,
    Tz: TimeZone,
{
    for cell in cells {
        let Some(deadline) = cell.deadline().and_then(|raw| parse_deadline(&raw, local)) else {
            continue;
        };
        let remaining = Remaining::from_millis((deadline - now).num_milliseconds());
        if remaining == Remaining::Expired {
            cell.mark_expired();
        }
        cell.set_text(&remaining.render(labels));
    }
}
