//! Year-month periods used for employment and graduation dates

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, written `YYYY-MM`
///
/// Ordering is chronological.
///
/// # Examples
///
/// ```
/// use careerelite_domain::YearMonth;
///
/// let start: YearMonth = "2021-06".parse().unwrap();
/// let end: YearMonth = "2022-12".parse().unwrap();
/// assert!(start < end);
/// assert_eq!(end.to_string(), "2022-12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: u16, month: u8) -> Result<Self, ProfileError> {
        if !(1..=12).contains(&month) {
            return Err(ProfileError::InvalidPeriod(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Calendar year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month of the year (1-12)
    pub fn month(&self) -> u8 {
        self.month
    }
}

impl FromStr for YearMonth {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProfileError::InvalidPeriod(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
