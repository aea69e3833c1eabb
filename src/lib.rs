//! Locale-aware formatting for EDTF level 0 dates and intervals.
//!
//! [EDTF](https://www.loc.gov/standards/datetime/) level 0 covers calendar
//! dates given to year, month or day precision, plus intervals between two
//! such dates. Parsing is handled by the [edtf] crate and glyph-level
//! rendering by ICU4X ([icu_datetime]); this crate is the decision procedure
//! in between. It classifies an input as a date or an interval, resolves a
//! formatting precision, picks a date skeleton for the requested width, and
//! hands concrete calendar dates to the locale engine.
//!
//! | Input        | `en`, short   | `en`, long           |
//! | -----        | -----------   | ----------           |
//! | `2020`       | `2020`        | `2020`               |
//! | `2020-09`    | `9/2020`      | `September 2020`     |
//! | `2020-09-30` | `9/30/20`     | `September 30, 2020` |
//! | `2020/2021`  | `2020 – 2021` | `2020 – 2021`        |
//!
//! ```
//! use edtf_locale::format_edtf;
//! use icu_locale::locale;
//!
//! let text = format_edtf("2020-09", "long", &locale!("en"))?;
//! assert_eq!(text, "September 2020");
//! # Ok::<(), edtf_locale::Error>(())
//! ```
//!
//! An interval bound resolves to its *strict* bounds when the other side is
//! more precise: the start of an interval uses the earliest date it could
//! denote, the end the latest, so `2020-09-02/2020-11` runs to November 30.
//!
//! The `format` argument accepts the four CLDR width names. Any other string
//! is used verbatim as a date skeleton, e.g. `"yMd"`; a misspelled width
//! name is therefore a skeleton, not an error, until the engine rejects it.

mod format;
mod options;
mod render;
mod skeleton;
mod value;

pub use edtf::level_0::{Date, Edtf};
pub use format::format_edtf;
pub use options::{DateFormat, FormatWidth};
pub use value::{parse_level0, PartialDate, Precision, Value};

use icu_datetime::DateTimeFormatterLoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input is not a valid EDTF level 0 date or interval. Raised for
    /// strings the level 0 grammar rejects (`2020?`, `2021/`, `2021-02-29`)
    /// and for parsed values carrying a time of day.
    InvalidFormat,

    /// The pattern names fields the date renderer cannot satisfy.
    UnsupportedPattern(String),

    /// The locale engine could not load data for the requested format.
    Load(DateTimeFormatterLoadError),
}

impl std::error::Error for Error {}

use core::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat => f.write_str("not a valid EDTF level 0 date or interval"),
            Error::UnsupportedPattern(pattern) => {
                write!(f, "unsupported date pattern {:?}", pattern)
            }
            Error::Load(inner) => write!(f, "{}", inner),
        }
    }
}

impl From<DateTimeFormatterLoadError> for Error {
    fn from(inner: DateTimeFormatterLoadError) -> Self {
        Error::Load(inner)
    }
}
