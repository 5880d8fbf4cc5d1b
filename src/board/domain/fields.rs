//! Validated scalar fields carried by maintenance tasks.

use super::BoardDomainError;
use serde::de::{self, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Non-empty street name shown as the task label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StreetName(String);

impl StreetName {
    /// Creates a validated street name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStreetName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyStreetName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the street name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StreetName {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StreetName> for String {
    fn from(value: StreetName) -> Self {
        value.0
    }
}

impl AsRef<str> for StreetName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StreetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Priority score between 1.0 and 10.0 with one decimal place.
///
/// Stored as tenths so comparisons and formatting stay exact. Serialises as
/// a number such as `9.5` and deserialises from either a number or its
/// decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityScore(u16);

impl PriorityScore {
    const MIN_TENTHS: u16 = 10;
    const MAX_TENTHS: u16 = 100;

    /// Mid-range score applied when a form leaves the field blank.
    pub const MIDPOINT: Self = Self(50);

    /// Creates a score from a value expressed in tenths (`95` is `9.5`).
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPriorityScore`] when the value is
    /// outside `10..=100`.
    pub fn from_tenths(tenths: u16) -> Result<Self, BoardDomainError> {
        if (Self::MIN_TENTHS..=Self::MAX_TENTHS).contains(&tenths) {
            Ok(Self(tenths))
        } else {
            Err(BoardDomainError::InvalidPriorityScore(
                Self(tenths).to_string(),
            ))
        }
    }

    /// Parses a decimal score such as `"8.5"` or `"7"`.
    ///
    /// Digits past the first decimal place round half up.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPriorityScore`] when the text is
    /// not a plain decimal number or falls outside `1.0..=10.0`.
    pub fn parse(value: &str) -> Result<Self, BoardDomainError> {
        let invalid = || BoardDomainError::InvalidPriorityScore(value.to_owned());
        let trimmed = value.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(invalid());
        }

        let whole_value: u16 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut fraction_digits = fraction.bytes().map(|b| u16::from(b - b'0'));
        let tenth = fraction_digits.next().unwrap_or(0);
        let round_up = fraction_digits.next().is_some_and(|digit| digit >= 5);

        let tenths = whole_value
            .checked_mul(10)
            .and_then(|scaled| scaled.checked_add(tenth))
            .and_then(|scaled| scaled.checked_add(u16::from(round_up)))
            .ok_or_else(invalid)?;
        Self::from_tenths(tenths).map_err(|_| invalid())
    }

    /// Returns the score in tenths.
    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }
}

impl Default for PriorityScore {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl FromStr for PriorityScore {
    type Err = BoardDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PriorityScore {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PriorityScore> for String {
    fn from(value: PriorityScore) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0.div_euclid(10), self.0.rem_euclid(10))
    }
}

impl Serialize for PriorityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Formatting then parsing keeps the exact decimal without float maths.
        let value: f64 = self
            .to_string()
            .parse()
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for PriorityScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriorityScoreVisitor)
    }
}

struct PriorityScoreVisitor;

impl Visitor<'_> for PriorityScoreVisitor {
    type Value = PriorityScore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a priority score between 1 and 10, as a number or decimal text")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        PriorityScore::parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        PriorityScore::parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        PriorityScore::parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        PriorityScore::parse(value).map_err(E::custom)
    }
}

/// Estimated effort for a task, drawn from a closed set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EstimatedDuration {
    /// One day.
    #[default]
    #[serde(rename = "1 hari")]
    OneDay,
    /// Two days.
    #[serde(rename = "2 hari")]
    TwoDays,
    /// Three days.
    #[serde(rename = "3 hari")]
    ThreeDays,
    /// Four days.
    #[serde(rename = "4 hari")]
    FourDays,
    /// Five days.
    #[serde(rename = "5 hari")]
    FiveDays,
    /// One week.
    #[serde(rename = "1 minggu")]
    OneWeek,
    /// Two weeks.
    #[serde(rename = "2 minggu")]
    TwoWeeks,
}

impl EstimatedDuration {
    /// Every duration option, shortest first.
    pub const ALL: [Self; 7] = [
        Self::OneDay,
        Self::TwoDays,
        Self::ThreeDays,
        Self::FourDays,
        Self::FiveDays,
        Self::OneWeek,
        Self::TwoWeeks,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1 hari",
            Self::TwoDays => "2 hari",
            Self::ThreeDays => "3 hari",
            Self::FourDays => "4 hari",
            Self::FiveDays => "5 hari",
            Self::OneWeek => "1 minggu",
            Self::TwoWeeks => "2 minggu",
        }
    }
}

impl TryFrom<&str> for EstimatedDuration {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|duration| duration.as_str() == normalized)
            .ok_or_else(|| BoardDomainError::UnknownDuration(value.to_owned()))
    }
}

impl fmt::Display for EstimatedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a comma-separated team list into trimmed member identifiers.
///
/// Blank segments are dropped, so an empty string yields an empty team.
#[must_use]
pub fn parse_team(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(str::to_owned)
        .collect()
}
