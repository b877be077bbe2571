//! Day and hour axes of the weekly grid.
//!
//! Labels ("월", "10시") exist only at the boundary; everything inside the
//! crate works with the typed indices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Weekday column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// Enumeration order used by the scorer.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "월",
            Day::Tue => "화",
            Day::Wed => "수",
            Day::Thu => "목",
            Day::Fri => "금",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "월" | "mon" | "monday" => Ok(Day::Mon),
            "화" | "tue" | "tuesday" => Ok(Day::Tue),
            "수" | "wed" | "wednesday" => Ok(Day::Wed),
            "목" | "thu" | "thursday" => Ok(Day::Thu),
            "금" | "fri" | "friday" => Ok(Day::Fri),
            _ => Err(CoreError::invalid(
                "day",
                format!("unknown day '{s}', expected one of 월 화 수 목 금 (or mon..fri)"),
            )),
        }
    }
}

impl TryFrom<String> for Day {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.label().to_string()
    }
}

/// Hour row of the grid, 8..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hour(u8);

impl Hour {
    pub const FIRST: u8 = 8;
    pub const LAST: u8 = 20;
    pub const COUNT: usize = (Self::LAST - Self::FIRST + 1) as usize;

    pub fn new(hour: u8) -> Result<Self, CoreError> {
        if (Self::FIRST..=Self::LAST).contains(&hour) {
            Ok(Self(hour))
        } else {
            Err(CoreError::invalid(
                "hour",
                format!("{hour} is outside {}..={}", Self::FIRST, Self::LAST),
            ))
        }
    }

    /// All rows in enumeration order.
    pub fn all() -> impl Iterator<Item = Hour> {
        (Self::FIRST..=Self::LAST).map(Hour)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        (self.0 - Self::FIRST) as usize
    }

    pub fn label(self) -> String {
        format!("{}시", self.0)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}시", self.0)
    }
}

impl FromStr for Hour {
    type Err = CoreError;

    /// Accepts `10시`, `10` and `10:00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix('시')
            .or_else(|| trimmed.strip_suffix(":00"))
            .unwrap_or(trimmed);
        let hour: u8 = digits
            .parse()
            .map_err(|_| CoreError::invalid("hour", format!("unknown hour '{s}'")))?;
        Hour::new(hour)
    }
}

impl TryFrom<String> for Hour {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hour> for String {
    fn from(hour: Hour) -> Self {
        hour.label()
    }
}

/// One (day, hour) cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub hour: Hour,
}

impl Slot {
    pub fn new(day: Day, hour: Hour) -> Self {
        Self { day, hour }
    }

    /// Every slot, day-major: all hours of 월, then all hours of 화, ...
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Hour::all().map(move |hour| Slot { day, hour }))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.hour)
    }
}

impl FromStr for Slot {
    type Err = CoreError;

    /// Parses `월:10시`, `mon:10` or `월 10시`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, hour) = s
            .trim()
            .split_once([':', ' '])
            .ok_or_else(|| CoreError::invalid("slot", format!("expected <day>:<hour>, got '{s}'")))?;
        Ok(Slot::new(day.parse()?, hour.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_labels_roundtrip() {
        for day in Day::ALL {
            assert_eq!(day.label().parse::<Day>().unwrap(), day);
        }
        assert_eq!("Friday".parse::<Day>().unwrap(), Day::Fri);
        assert!("토".parse::<Day>().is_err());
        // Bare numbers are ambiguous between Sunday- and Monday-based counting.
        assert!("0".parse::<Day>().is_err());
        assert!("1".parse::<Day>().is_err());
    }

    #[test]
    fn test_hour_parsing_forms() {
        assert_eq!("10시".parse::<Hour>().unwrap().value(), 10);
        assert_eq!("14".parse::<Hour>().unwrap().value(), 14);
        assert_eq!("20:00".parse::<Hour>().unwrap().value(), 20);
        assert!("7시".parse::<Hour>().is_err());
        assert!("21".parse::<Hour>().is_err());
        assert!("noon".parse::<Hour>().is_err());
    }

    #[test]
    fn test_hour_axis() {
        let hours: Vec<String> = Hour::all().map(Hour::label).collect();
        assert_eq!(hours.len(), Hour::COUNT);
        assert_eq!(hours.first().map(String::as_str), Some("8시"));
        assert_eq!(hours.last().map(String::as_str), Some("20시"));
        assert_eq!(Hour::new(8).unwrap().index(), 0);
        assert_eq!(Hour::new(20).unwrap().index(), 12);
    }

    #[test]
    fn test_slot_enumeration_is_day_major() {
        let slots: Vec<Slot> = Slot::all().collect();
        assert_eq!(slots.len(), 65);
        assert_eq!(slots[0], Slot::new(Day::Mon, Hour::new(8).unwrap()));
        assert_eq!(slots[12], Slot::new(Day::Mon, Hour::new(20).unwrap()));
        assert_eq!(slots[13], Slot::new(Day::Tue, Hour::new(8).unwrap()));
    }

    #[test]
    fn test_slot_parse() {
        let slot: Slot = "월:10시".parse().unwrap();
        assert_eq!(slot, Slot::new(Day::Mon, Hour::new(10).unwrap()));
        let slot: Slot = "thu 15".parse().unwrap();
        assert_eq!(slot, Slot::new(Day::Thu, Hour::new(15).unwrap()));
        assert!("월10시".parse::<Slot>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let slot = Slot::new(Day::Wed, Hour::new(11).unwrap());
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"day":"수","hour":"11시"}"#);
    }
}
