// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps a date skeleton string to the closest ICU4X semantic field set.
//!
//! ICU4X keys its date patterns on typed field sets rather than raw CLDR
//! skeleton strings, so the fuzzy matching a CLDR `availableFormats` lookup
//! performs lives here instead: collect the date fields the skeleton names,
//! snap the combination to the nearest available
//! [DateFields][icu_datetime::fieldsets::builder::DateFields] variant, and
//! derive the length from the field widths.

use icu_datetime::fieldsets::builder::{DateFields, FieldSetBuilder};
use icu_datetime::fieldsets::enums::{CalendarPeriodFieldSet, DateFieldSet};
use icu_datetime::options::{Length, YearStyle};

use crate::Error;

/// A field set fuzzy-matched from a skeleton. ICU4X splits year/month-only
/// combinations (`Y`, `YM`, `M`) into calendar-period field sets, built and
/// carried separately from complete-date field sets.
#[derive(Debug, Copy, Clone)]
pub(crate) enum SkeletonFieldSet {
    Date(DateFieldSet),
    CalendarPeriod(CalendarPeriodFieldSet),
}

pub(crate) fn field_set(skeleton: &str) -> Result<SkeletonFieldSet, Error> {
    let fields = Fields::scan(skeleton)?;
    let mut builder = FieldSetBuilder::new();
    builder.date_fields = Some(fields.date_fields());
    builder.length = Some(fields.length());
    let built = if fields.day > 0 || fields.weekday > 0 {
        if fields.year > 0 {
            // CLDR availableFormats skeletons carry full years: yMd is
            // "11/1/2020", not "11/1/20"
            builder.year_style = Some(YearStyle::Full);
        }
        builder.build_date().map(SkeletonFieldSet::Date)
    } else {
        builder
            .build_calendar_period()
            .map(SkeletonFieldSet::CalendarPeriod)
    };
    built.map_err(|_| Error::UnsupportedPattern(skeleton.into()))
}

/// Run lengths of the recognized symbols in a skeleton.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Fields {
    year: usize,
    month: usize,
    day: usize,
    weekday: usize,
}

impl Fields {
    fn scan(skeleton: &str) -> Result<Self, Error> {
        let mut fields = Fields::default();
        for symbol in skeleton.chars() {
            let run = match symbol {
                'y' | 'u' => &mut fields.year,
                'M' | 'L' => &mut fields.month,
                'd' => &mut fields.day,
                'E' | 'e' | 'c' => &mut fields.weekday,
                // time and zone fields included: this is a date renderer
                _ => return Err(Error::UnsupportedPattern(skeleton.into())),
            };
            *run += 1;
        }
        if fields == Fields::default() {
            return Err(Error::UnsupportedPattern(skeleton.into()));
        }
        Ok(fields)
    }

    /// Snaps to the nearest variant covering every requested field. Fuzzy
    /// matching never drops a field; it fills in neighbors.
    fn date_fields(&self) -> DateFields {
        match (
            self.year > 0,
            self.month > 0,
            self.day > 0,
            self.weekday > 0,
        ) {
            // exact combinations
            (true, false, false, false) => DateFields::Y,
            (false, true, false, false) => DateFields::M,
            (false, false, true, false) => DateFields::D,
            (false, false, false, true) => DateFields::E,
            (true, true, false, false) => DateFields::YM,
            (false, true, true, false) => DateFields::MD,
            (true, true, true, false) => DateFields::YMD,
            (false, false, true, true) => DateFields::DE,
            (false, true, true, true) => DateFields::MDE,
            (true, true, true, true) => DateFields::YMDE,
            // combinations with no variant of their own
            (true, false, true, false) => DateFields::YMD,
            (false, true, false, true) => DateFields::MDE,
            (true, false, false, true) | (true, true, false, true) | (true, false, true, true) => {
                DateFields::YMDE
            }
            (false, false, false, false) => unreachable!("scan rejects empty skeletons"),
        }
    }

    fn length(&self) -> Length {
        if self.month >= 4 || self.weekday >= 4 {
            Length::Long
        } else if self.month == 3 {
            Length::Medium
        } else {
            Length::Short
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn year_and_month_skeletons_are_calendar_periods() {
        assert!(matches!(
            field_set("y").unwrap(),
            SkeletonFieldSet::CalendarPeriod(CalendarPeriodFieldSet::Y(_))
        ));
        for skeleton in ["yM", "yMMM", "yMMMM"] {
            assert!(matches!(
                field_set(skeleton).unwrap(),
                SkeletonFieldSet::CalendarPeriod(CalendarPeriodFieldSet::YM(_))
            ));
        }
        assert!(matches!(
            field_set("MMMM").unwrap(),
            SkeletonFieldSet::CalendarPeriod(CalendarPeriodFieldSet::M(_))
        ));
    }

    #[test]
    fn day_skeletons_are_date_sets() {
        assert!(matches!(
            field_set("yMd").unwrap(),
            SkeletonFieldSet::Date(DateFieldSet::YMD(_))
        ));
        assert!(matches!(
            field_set("EEEEyMMMMd").unwrap(),
            SkeletonFieldSet::Date(DateFieldSet::YMDE(_))
        ));
    }

    #[test]
    fn lengths() {
        assert_eq!(Fields::scan("yMd").unwrap().length(), Length::Short);
        assert_eq!(Fields::scan("yMMMd").unwrap().length(), Length::Medium);
        assert_eq!(Fields::scan("yMMMMd").unwrap().length(), Length::Long);
        assert_eq!(Fields::scan("EEEEyMd").unwrap().length(), Length::Long);
    }

    #[test]
    fn gaps_fill_upward() {
        // no year-and-day-only set exists; month comes along
        assert!(matches!(
            field_set("yd").unwrap(),
            SkeletonFieldSet::Date(DateFieldSet::YMD(_))
        ));
        assert!(matches!(
            field_set("yE").unwrap(),
            SkeletonFieldSet::Date(DateFieldSet::YMDE(_))
        ));
    }

    #[test]
    fn rejected_skeletons() {
        assert!(matches!(field_set(""), Err(Error::UnsupportedPattern(_))));
        assert!(matches!(
            field_set("jms"),
            Err(Error::UnsupportedPattern(_))
        ));
        assert!(matches!(
            field_set("yMd H"),
            Err(Error::UnsupportedPattern(_))
        ));
    }
}
