// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use edtf::level_0::Edtf;
use icu_locale::Locale;

use crate::options::date_skeleton;
use crate::value::{interval_precision, PartialDate};
use crate::{render, DateFormat, Error, Precision, Value};

/// Formats an EDTF level 0 expression for a locale.
///
/// `value` accepts a raw EDTF string, a parsed [Edtf] (or its date or
/// interval contents), or [Value::Today] for the current date. `format`
/// accepts a [crate::FormatWidth], or a string: one of `"full"`, `"long"`,
/// `"medium"` or `"short"`, with any other string used verbatim as a date
/// skeleton.
///
/// ```
/// use edtf_locale::format_edtf;
/// use icu_locale::locale;
///
/// let en = locale!("en");
/// assert_eq!(format_edtf("2020", "short", &en)?, "2020");
/// assert_eq!(format_edtf("2020-09", "short", &en)?, "9/2020");
/// // the upper bound expands to the end of November
/// assert_eq!(
///     format_edtf("2020-09-02/2020-11", "medium", &en)?,
///     "Sep 2, 2020 – Nov 30, 2020"
/// );
/// // a skeleton instead of a width
/// assert_eq!(format_edtf("2020-11", "yMd", &en)?, "11/1/2020");
/// # Ok::<(), edtf_locale::Error>(())
/// ```
///
/// There is no fallback rendering: a call either returns a fully formatted
/// string or an [Error].
pub fn format_edtf<'a>(
    value: impl Into<Value<'a>>,
    format: impl Into<DateFormat<'a>>,
    locale: &Locale,
) -> Result<String, Error> {
    let format = format.into();
    match value.into().into_edtf()? {
        Edtf::Date(date) => format_date(date.into(), format, locale),
        Edtf::Interval(lower, upper) => {
            format_interval(lower.into(), upper.into(), format, locale)
        }
        // level 0 allows a time of day on a single date, but this crate
        // formats dates only
        Edtf::DateTime(_) => Err(Error::InvalidFormat),
    }
}

fn format_date(date: PartialDate, format: DateFormat, locale: &Locale) -> Result<String, Error> {
    let resolved = date.lower_strict()?;
    match format {
        // A complete date takes the ordinary calendar-date path rather than
        // a skeleton, keeping its output bit-identical to plain date
        // formatting.
        DateFormat::Width(width) if date.precision() == Precision::Day => {
            render::calendar_date(resolved, width, locale)
        }
        DateFormat::Width(width) => {
            render::skeleton_date(date_skeleton(date.precision(), width), resolved, locale)
        }
        DateFormat::Pattern(pattern) => render::skeleton_date(pattern, resolved, locale),
    }
}

fn format_interval(
    lower: PartialDate,
    upper: PartialDate,
    format: DateFormat,
    locale: &Locale,
) -> Result<String, Error> {
    // Asymmetric resolution: the start takes its earliest consistent date,
    // the end its latest. A year-only end paired with a day-precision start
    // expands to December 31.
    let start = lower.lower_strict()?;
    let end = upper.upper_strict()?;
    let pattern = match format {
        DateFormat::Width(width) => date_skeleton(interval_precision(&lower, &upper), width),
        DateFormat::Pattern(pattern) => pattern,
    };
    render::interval(start, end, pattern, locale)
}
