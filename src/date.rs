use chrono::{Datelike, NaiveDate};

/// Format used once the month name has been shortened, e.g. `5 Mar 2024`.
const ABBREVIATED_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("invalid month name: {0:?}")]
    InvalidMonth(String),

    #[error("invalid date format: {0:?}")]
    InvalidDateFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn from_full_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.full_name() == name)
    }

    /// 1-based, January = 1.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

/// Parses dates written as `<day> <FullMonthName> <year>`, e.g. `5 March 2024`.
///
/// Month names are matched exactly against the twelve English names. The
/// result carries no time of day and no timezone.
pub fn parse_bill_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let mut parts = input.split_whitespace();
    let day = parts.next().unwrap_or_default();
    let month_name = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();

    let month = Month::from_full_name(month_name)
        .ok_or_else(|| DateParseError::InvalidMonth(month_name.to_owned()))?;

    if parts.next().is_some() {
        return Err(DateParseError::InvalidDateFormat(input.to_owned()));
    }

    let abbreviated = format!("{day} {} {year}", month.abbreviation());

    return NaiveDate::parse_from_str(&abbreviated, ABBREVIATED_FORMAT)
        .map_err(|_| DateParseError::InvalidDateFormat(input.to_owned()));
}

pub fn format_bill_date(date: NaiveDate) -> String {
    let month = Month::from_number(date.month())
        .map(Month::full_name)
        .unwrap_or_default();

    format!("{} {} {}", date.day(), month, date.year())
}
