//! Enumerated rule fields and their wire names.

use chrono::{Month, Weekday};

/// A rule field that arrives as a free-form string.
///
/// Unknown strings are kept rather than rejected: the expander degrades on
/// them (truncation, no weekday shift) instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag<T> {
    Known(T),
    Unrecognized(String),
}

impl<T> Tag<T> {
    /// Parses `raw` with `parse`, keeping the trimmed input when it is not recognized.
    pub fn parse(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        let raw = raw.trim();
        match parse(raw) {
            Some(value) => Self::Known(value),
            None => Self::Unrecognized(raw.to_string()),
        }
    }

    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unrecognized(_) => None,
        }
    }
}

impl<T: Copy> Tag<T> {
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.known().copied()
    }
}

impl<T> From<T> for Tag<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

/// Expansion strategy selected by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleModel {
    /// One unit at a time.
    Each,
    /// N units at a time.
    Every,
    /// Weekly on a fixed weekday.
    DayOfWeek,
    /// Declared, no expansion.
    MonthsOfYear,
    /// Declared, no expansion.
    FirstLastOf,
    /// Declared, no expansion.
    DayOfMonth,
}

impl CycleModel {
    /// Returns the wire name for this model.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Each => "Each",
            Self::Every => "Every",
            Self::DayOfWeek => "DayOfWeek",
            Self::MonthsOfYear => "MonthsOfYear",
            Self::FirstLastOf => "FirstLastOf",
            Self::DayOfMonth => "DayOfMonth",
        }
    }

    /// Parses a model from its wire name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "each" => Some(Self::Each),
            "every" => Some(Self::Every),
            "dayofweek" => Some(Self::DayOfWeek),
            "monthsofyear" => Some(Self::MonthsOfYear),
            "firstlastof" => Some(Self::FirstLastOf),
            "dayofmonth" => Some(Self::DayOfMonth),
            _ => None,
        }
    }
}

/// Calendar unit a rule steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepUnit {
    Day,
    Week,
    Month,
    Year,
}

impl StepUnit {
    /// Parses a singular unit name (case-insensitive).
    #[must_use]
    pub fn parse_singular(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Parses a plural unit name (case-insensitive).
    #[must_use]
    pub fn parse_plural(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "days" => Some(Self::Day),
            "weeks" => Some(Self::Week),
            "months" => Some(Self::Month),
            "years" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Parses a full English weekday name (case-insensitive).
#[must_use]
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parses a full English month name (case-insensitive).
#[must_use]
pub fn parse_month(s: &str) -> Option<Month> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|month| month.name().eq_ignore_ascii_case(s))
}
