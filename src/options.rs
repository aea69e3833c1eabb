// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::value::Precision;

/// The four CLDR date format widths, in decreasing verbosity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormatWidth {
    /// Usually includes the weekday: `Wednesday, September 30, 2020`
    Full,
    /// Wide month name: `September 30, 2020`
    Long,
    /// Abbreviated month name: `Sep 30, 2020`
    Medium,
    /// All numeric: `9/30/20`
    Short,
}

impl Default for FormatWidth {
    fn default() -> Self {
        FormatWidth::Medium
    }
}

impl FormatWidth {
    /// The lowercase name for this width, as recognized by the permissive
    /// `From<&str>` conversion on [DateFormat].
    pub fn token(self) -> &'static str {
        match self {
            FormatWidth::Full => "full",
            FormatWidth::Long => "long",
            FormatWidth::Medium => "medium",
            FormatWidth::Short => "short",
        }
    }
}

/// The format argument to [crate::format_edtf]: an enumerated width, or a
/// custom date skeleton such as `yMd`.
///
/// The `From<&str>` conversion deliberately never fails. A string that is
/// not one of the four width names is reinterpreted as a skeleton, so a typo
/// in a width name becomes a skeleton and usually surfaces later as
/// [crate::Error::UnsupportedPattern]. Callers wanting strictness can
/// construct [DateFormat::Width] directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DateFormat<'a> {
    Width(FormatWidth),
    Pattern(&'a str),
}

impl Default for DateFormat<'_> {
    fn default() -> Self {
        DateFormat::Width(FormatWidth::default())
    }
}

impl From<FormatWidth> for DateFormat<'_> {
    fn from(width: FormatWidth) -> Self {
        DateFormat::Width(width)
    }
}

impl<'a> From<&'a str> for DateFormat<'a> {
    fn from(input: &'a str) -> Self {
        for width in [
            FormatWidth::Full,
            FormatWidth::Long,
            FormatWidth::Medium,
            FormatWidth::Short,
        ] {
            if input == width.token() {
                return DateFormat::Width(width);
            }
        }
        DateFormat::Pattern(input)
    }
}

/// The date skeleton for a precision and width.
///
/// Day precision appears here for interval rendering only. A single
/// complete date goes through the calendar-date formatter instead, so that
/// its output is identical to formatting the same calendar date without
/// this crate in the way.
pub(crate) fn date_skeleton(precision: Precision, width: FormatWidth) -> &'static str {
    use FormatWidth::*;
    match (precision, width) {
        (Precision::Year, _) => "y",
        (Precision::Month, Full | Long) => "yMMMM",
        (Precision::Month, Medium) => "yMMM",
        (Precision::Month, Short) => "yM",
        (Precision::Day, Full) => "EEEEyMMMMd",
        (Precision::Day, Long) => "yMMMMd",
        (Precision::Day, Medium) => "yMMMd",
        (Precision::Day, Short) => "yMd",
    }
}
