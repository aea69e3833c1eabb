// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Delegation to the ICU4X locale engine. Everything glyph-shaped happens
//! on the other side of this module.

use icu_calendar::{Date as IcuDate, Iso};
use icu_datetime::fieldsets;
use icu_datetime::fieldsets::enums::DateFieldSet;
use icu_datetime::DateTimeFormatter;
use icu_locale::Locale;
use writeable::Writeable;

use crate::skeleton::{self, SkeletonFieldSet};
use crate::{Error, FormatWidth};

/// The CLDR root-locale interval fallback, `{0} – {1}` (U+2013). ICU4X
/// exposes no date-interval pattern data, so both endpoints are rendered
/// with the same field set and joined with this.
const RANGE_SEPARATOR: &str = " – ";

/// Renders a complete calendar date with the standard date format for the
/// width. Output is identical to formatting the same [IcuDate] directly.
pub(crate) fn calendar_date(
    date: IcuDate<Iso>,
    width: FormatWidth,
    locale: &Locale,
) -> Result<String, Error> {
    let field_set = match width {
        FormatWidth::Full => DateFieldSet::YMDE(fieldsets::YMDE::long()),
        FormatWidth::Long => DateFieldSet::YMD(fieldsets::YMD::long()),
        FormatWidth::Medium => DateFieldSet::YMD(fieldsets::YMD::medium()),
        FormatWidth::Short => DateFieldSet::YMD(fieldsets::YMD::short()),
    };
    let formatter = DateTimeFormatter::try_new(locale.into(), field_set)?;
    Ok(formatter.format(&date).write_to_string().into_owned())
}

/// Renders a date with the field set fuzzy-matched from `pattern`.
pub(crate) fn skeleton_date(
    pattern: &str,
    date: IcuDate<Iso>,
    locale: &Locale,
) -> Result<String, Error> {
    with_field_set(skeleton::field_set(pattern)?, date, locale)
}

/// Renders an interval by formatting both endpoints with the same pattern,
/// in the order given. Reverse-chronological intervals are not reordered.
pub(crate) fn interval(
    start: IcuDate<Iso>,
    end: IcuDate<Iso>,
    pattern: &str,
    locale: &Locale,
) -> Result<String, Error> {
    let set = skeleton::field_set(pattern)?;
    let start = with_field_set(set, start, locale)?;
    let end = with_field_set(set, end, locale)?;
    Ok(format!("{}{}{}", start, RANGE_SEPARATOR, end))
}

fn with_field_set(
    set: SkeletonFieldSet,
    date: IcuDate<Iso>,
    locale: &Locale,
) -> Result<String, Error> {
    match set {
        SkeletonFieldSet::Date(set) => {
            let formatter = DateTimeFormatter::try_new(locale.into(), set)?;
            Ok(formatter.format(&date).write_to_string().into_owned())
        }
        SkeletonFieldSet::CalendarPeriod(set) => {
            let formatter = DateTimeFormatter::try_new(locale.into(), set)?;
            Ok(formatter.format(&date).write_to_string().into_owned())
        }
    }
}
