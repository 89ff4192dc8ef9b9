use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum YearMonthError {
    #[error("expected YYYY-MM, got `{0}`")]
    Format(String),
    #[error("month must be between 1 and 12, got {0}")]
    Month(u32),
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthError::Month(month));
        }
        Ok(Self { year, month })
    }

    /// Month of a timestamp, read in UTC.
    pub fn of(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls in this month on the UTC calendar. Timestamps
    /// imported with another offset are normalized to UTC on read, so
    /// `2024-01-31T23:30:00-05:00` belongs to 2024-02.
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year.saturating_sub(1),
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let format_error = || YearMonthError::Format(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(format_error)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(format_error());
        }
        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_and_displays_iso_months() {
        let month: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_months() {
        assert!("2024-3".parse::<YearMonth>().is_err());
        assert!("2024/03".parse::<YearMonth>().is_err());
        assert_eq!(
            "2024-13".parse::<YearMonth>(),
            Err(YearMonthError::Month(13))
        );
    }

    #[test]
    fn previous_and_next_wrap_years() {
        let january = YearMonth::new(2024, 1).unwrap();
        assert_eq!(january.previous(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(january.previous().next(), january);
    }

    #[test]
    fn containment_uses_utc_calendar() {
        let month = YearMonth::new(2024, 2).unwrap();
        let inside = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
        let outside = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert!(month.contains(&inside));
        assert!(!month.contains(&outside));
        assert_eq!(YearMonth::of(&outside), YearMonth::new(2024, 3).unwrap());
    }
}
