use crate::errors::{Error, InputField, Result};
use crate::extensions::enums::valid_csv;
use chrono::Month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// How today's date is set apart from the other days of the grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EmphasisStyle {
    /// ANSI when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    Ansi,
    Plain,
}

impl EmphasisStyle {
    pub fn try_from_str(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported emphasis style: '{}'. Valid styles: {}",
                s.trim(),
                valid_csv::<EmphasisStyle>()
            ))
        })
    }
}

impl Serialize for EmphasisStyle {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for EmphasisStyle {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<EmphasisStyle, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        EmphasisStyle::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Parse a whole number typed at the prompt for `field`.
///
/// Surrounding whitespace and a leading `+` are accepted; anything else that
/// is not an integer (including `7.5`) is rejected.
pub fn parse_whole_number(input: &str, field: InputField) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::NotWholeNumber { field })
}

/// A non-negative calendar year. No upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i64);

impl Year {
    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::NegativeYear(value));
        }
        Ok(Self(value))
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        Self::new(parse_whole_number(s, InputField::Year)?)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthNumber(u32);

impl MonthNumber {
    pub fn new(value: i64) -> Result<Self> {
        if !(1..=12).contains(&value) {
            return Err(Error::MonthOutOfRange(value));
        }
        Ok(Self(value as u32))
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        Self::new(parse_whole_number(s, InputField::Month)?)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// English display name, e.g. "February".
    pub fn name(self) -> &'static str {
        Month::try_from(self.0 as u8)
            .map(|month| month.name())
            .unwrap_or_default()
    }
}

impl fmt::Display for MonthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// The month a calendar is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: Year,
    pub month: MonthNumber,
}

impl YearMonth {
    pub fn new(year: i64, month: i64) -> Result<Self> {
        Ok(Self {
            year: Year::new(year)?,
            month: MonthNumber::new(month)?,
        })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}
