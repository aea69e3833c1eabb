// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use chrono::Datelike;
use edtf::level_0::{Date, Edtf};
use icu_calendar::{Date as IcuDate, Iso};

use crate::Error;

/// How much of a calendar date an EDTF value actually specifies.
///
/// Ordered by specificity, so the finer of two precisions is [Ord::max]:
/// `Year < Month < Day`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// `2020`
    Year,
    /// `2020-09`
    Month,
    /// `2020-09-30`
    Day,
}

/// The value argument to [crate::format_edtf].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// The current local calendar date, at day precision. The only place
    /// this crate reads the system clock.
    Today,
    /// An EDTF level 0 string, run through [parse_level0] before formatting.
    Str(&'a str),
    /// An already parsed value.
    Parsed(Edtf),
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(input: &'a str) -> Self {
        Value::Str(input)
    }
}

impl From<Edtf> for Value<'_> {
    fn from(edtf: Edtf) -> Self {
        Value::Parsed(edtf)
    }
}

impl From<Date> for Value<'_> {
    fn from(date: Date) -> Self {
        Value::Parsed(Edtf::Date(date))
    }
}

impl From<(Date, Date)> for Value<'_> {
    fn from((lower, upper): (Date, Date)) -> Self {
        Value::Parsed(Edtf::Interval(lower, upper))
    }
}

/// Parses an EDTF level 0 string.
///
/// ```
/// use edtf_locale::{parse_level0, Error};
/// assert!(parse_level0("2020-09-02/2020-11").is_ok());
/// assert_eq!(parse_level0("2020?"), Err(Error::InvalidFormat));
/// ```
pub fn parse_level0(input: &str) -> Result<Edtf, Error> {
    Edtf::parse(input).map_err(|_| Error::InvalidFormat)
}

impl Value<'_> {
    pub(crate) fn into_edtf(self) -> Result<Edtf, Error> {
        match self {
            Value::Today => {
                let today = chrono::Local::now().date_naive();
                Date::from_ymd_opt(today.year(), today.month(), today.day())
                    .map(Edtf::Date)
                    .ok_or(Error::InvalidFormat)
            }
            Value::Str(input) => parse_level0(input),
            Value::Parsed(edtf) => Ok(edtf),
        }
    }
}

/// A date known only to its stated [Precision], resolvable to the strict
/// bounds on the calendar dates it could denote.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PartialDate {
    year: i32,
    /// 0 when unspecified, like [edtf::level_0::Date::month].
    month: u32,
    /// 0 when unspecified. Never nonzero with a zero month.
    day: u32,
}

impl From<Date> for PartialDate {
    fn from(date: Date) -> Self {
        PartialDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl PartialDate {
    pub fn precision(&self) -> Precision {
        if self.day != 0 {
            Precision::Day
        } else if self.month != 0 {
            Precision::Month
        } else {
            Precision::Year
        }
    }

    /// The earliest calendar date consistent with this value: `2020` resolves
    /// to 2020-01-01, `2020-09` to 2020-09-01.
    pub fn lower_strict(&self) -> Result<IcuDate<Iso>, Error> {
        let month = if self.month == 0 { 1 } else { self.month };
        let day = if self.day == 0 { 1 } else { self.day };
        iso_date(self.year, month, day)
    }

    /// The latest calendar date consistent with this value: `2020` resolves
    /// to 2020-12-31, `2020-02` to February 29 in a leap year.
    pub fn upper_strict(&self) -> Result<IcuDate<Iso>, Error> {
        let month = if self.month == 0 { 12 } else { self.month };
        if self.day != 0 {
            return iso_date(self.year, month, self.day);
        }
        let first = iso_date(self.year, month, 1)?;
        iso_date(self.year, month, u32::from(first.days_in_month()))
    }
}

/// The interval as a whole renders at the finer of its two bounds'
/// precisions, so the side with more detail keeps it.
pub(crate) fn interval_precision(lower: &PartialDate, upper: &PartialDate) -> Precision {
    lower.precision().max(upper.precision())
}

fn iso_date(year: i32, month: u32, day: u32) -> Result<IcuDate<Iso>, Error> {
    // level 0 validated the components already; the conversions guard the
    // u8 narrowing
    let month = u8::try_from(month).map_err(|_| Error::InvalidFormat)?;
    let day = u8::try_from(day).map_err(|_| Error::InvalidFormat)?;
    IcuDate::try_new_iso(year, month, day).map_err(|_| Error::InvalidFormat)
}
