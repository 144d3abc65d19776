//! Publish date parsing and feed formatting.
//!
//! Feed dates come from two places: an explicit metadata field written by
//! the author, and the short date printed by `git log --date=short`. Both
//! are accepted in exactly two shapes:
//!
//! - `YYYY-MM-DD HH:MM`
//! - `YYYY-MM-DD`
//!
//! Month, day, hour and minute may drop their leading zero (`2021-6-5 9:05`).
//!
//! # Examples
//!
//! ```ignore
//! let date = PublishDate::parse("2024-06-15 14:30")?;
//! assert_eq!(date.to_rfc2822(), "Sat, 15 Jun 2024 14:30:00 GMT");
//! ```

use std::fmt;
use thiserror::Error;

/// Why a date string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("`{0}` does not match YYYY-MM-DD HH:MM or YYYY-MM-DD")]
    Format(String),

    #[error("`{input}` is not a calendar date: {reason}")]
    OutOfRange { input: String, reason: String },
}

/// UTC publish date with minute precision.
///
/// Field order matters: the derived `Ord` compares chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl PublishDate {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0)
    }

    /// Parse `YYYY-MM-DD HH:MM`, falling back to `YYYY-MM-DD`.
    ///
    /// Surrounding whitespace is ignored. The first shape that matches wins.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        let date = Self::parse_date_time(trimmed)
            .or_else(|| Self::parse_date(trimmed))
            .ok_or_else(|| DateError::Format(trimmed.to_string()))?;

        date.validate().map_err(|reason| DateError::OutOfRange {
            input: trimmed.to_string(),
            reason,
        })?;
        Ok(date)
    }

    /// `YYYY-MM-DD HH:MM`; hour and minute may have one digit.
    fn parse_date_time(s: &str) -> Option<Self> {
        let (date, time) = s.split_once(' ')?;
        let (hour, minute) = time.split_once(':')?;
        Some(Self {
            hour: parse_u8(hour)?,
            minute: parse_u8(minute)?,
            ..Self::parse_date(date)?
        })
    }

    /// `YYYY-MM-DD`; month and day may have one digit.
    fn parse_date(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Some(Self::from_ymd(
            parse_u16(year.as_bytes())?,
            parse_u8(month)?,
            parse_u8(day)?,
        ))
    }

    fn validate(self) -> Result<(), String> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
        } = self;

        if !(1..=12).contains(&month) {
            return Err(format!("month is invalid: {month}"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(format!("day is invalid: {day}"));
        }
        if hour > 23 {
            return Err(format!("hour is invalid: {hour}"));
        }
        if minute > 59 {
            return Err(format!("minute is invalid: {minute}"));
        }
        Ok(())
    }

    /// Format as RFC 2822 for RSS `pubDate`.
    ///
    /// Returns: `Sat, 15 Jun 2024 14:30:00 GMT`
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:00 GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[usize::from(self.month - 1)],
            self.year,
            self.hour,
            self.minute,
        )
    }

    /// Format as RFC 3339 for Atom `updated`.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:00Z`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:00Z",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }

    /// Zeller's congruence, 0 = Saturday.
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[inline]
#[allow(clippy::manual_is_multiple_of)]
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[inline]
fn digit(b: u8) -> Option<u8> {
    let d = b.wrapping_sub(b'0');
    (d <= 9).then_some(d)
}

/// Parse a 1 or 2 digit ASCII number
#[inline]
fn parse_u8(s: &str) -> Option<u8> {
    match *s.as_bytes() {
        [d] => digit(d),
        [d1, d2] => Some(digit(d1)? * 10 + digit(d2)?),
        _ => None,
    }
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    bytes.iter().try_fold(0u16, |acc, &b| {
        let d = b.wrapping_sub(b'0');
        (d <= 9).then(|| acc * 10 + u16::from(d))
    })
}
