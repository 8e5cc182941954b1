//! Relative-phrase rendering
//!
//! Defines the time units and rendering policies shared by all relative
//! formatting operations, plus the built-in English phrase backend.
//! Localization stays behind the `PhraseRenderer` trait so the threshold
//! logic in `relative` never touches phrase tables directly.

use serde::{Deserialize, Serialize};

use crate::traits::PhraseRenderer;

/// A named time granularity used for relative-phrase selection
///
/// Month and year use a simplified calendar approximation (30-day
/// months, 365-day years) with no leap-year correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// One second
    Second,
    /// 60 seconds
    Minute,
    /// 3,600 seconds
    Hour,
    /// 86,400 seconds
    Day,
    /// 2,592,000 seconds (30 days)
    Month,
    /// 31,536,000 seconds (365 days)
    Year,
}

impl Unit {
    /// Units ordered largest to smallest, for multi-term decomposition
    pub const DESCENDING: [Unit; 6] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Conversion divisor in seconds
    pub fn seconds(self) -> i64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 60,
            Unit::Hour => 3_600,
            Unit::Day => 86_400,
            Unit::Month => 2_592_000,
            Unit::Year => 31_536_000,
        }
    }
}

/// Whether a renderer may substitute idiomatic words for ±1 values
///
/// Under `Auto`, "1 day ago" becomes "yesterday" when the backend has
/// such a phrase. `Always` keeps the numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumericPolicy {
    /// Always use the numeric form (e.g. "1 day ago")
    #[default]
    Always,
    /// Substitute idiomatic phrases when available (e.g. "yesterday")
    Auto,
}

/// Unit vocabulary width for rendered phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhraseStyle {
    /// Full unit names (e.g. "3 days ago")
    #[default]
    Long,
    /// Abbreviated unit names (e.g. "3 days ago", "2 hrs ago")
    Short,
    /// Minimal unit names (e.g. "3d ago")
    Narrow,
}

/// Built-in English phrase backend
///
/// Produces "in 3 days" / "3 days ago" framing. Under
/// `NumericPolicy::Auto` it substitutes "yesterday", "tomorrow",
/// "last month", "next year" and friends for ±1 day/month/year, and
/// "now" for zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPhrases {
    /// Vocabulary width used for unit labels
    pub style: PhraseStyle,
}

impl EnglishPhrases {
    /// Creates a backend with the given vocabulary style
    pub fn with_style(style: PhraseStyle) -> Self {
        EnglishPhrases { style }
    }

    /// Idiomatic substitutions for ±1 values, used under `Auto`
    fn idiom(&self, value: i64, unit: Unit) -> Option<&'static str> {
        match (value, unit) {
            (0, _) => Some("now"),
            (-1, Unit::Day) => Some("yesterday"),
            (1, Unit::Day) => Some("tomorrow"),
            (-1, Unit::Month) => Some("last month"),
            (1, Unit::Month) => Some("next month"),
            (-1, Unit::Year) => Some("last year"),
            (1, Unit::Year) => Some("next year"),
            _ => None,
        }
    }
}

impl PhraseRenderer for EnglishPhrases {
    fn render(&self, value: i64, unit: Unit, numeric: NumericPolicy) -> String {
        if numeric == NumericPolicy::Auto {
            if let Some(phrase) = self.idiom(value, unit) {
                return phrase.to_string();
            }
        }

        let magnitude = value.unsigned_abs();
        let label = self.unit_label(unit, magnitude != 1);
        if value < 0 {
            format!("{} {} ago", magnitude, label)
        } else {
            format!("in {} {}", magnitude, label)
        }
    }

    fn unit_label(&self, unit: Unit, plural: bool) -> String {
        let label = match self.style {
            PhraseStyle::Long => match unit {
                Unit::Second => if plural { "seconds" } else { "second" },
                Unit::Minute => if plural { "minutes" } else { "minute" },
                Unit::Hour => if plural { "hours" } else { "hour" },
                Unit::Day => if plural { "days" } else { "day" },
                Unit::Month => if plural { "months" } else { "month" },
                Unit::Year => if plural { "years" } else { "year" },
            },
            PhraseStyle::Short => match unit {
                Unit::Second => if plural { "secs" } else { "sec" },
                Unit::Minute => if plural { "mins" } else { "min" },
                Unit::Hour => if plural { "hrs" } else { "hr" },
                Unit::Day => if plural { "days" } else { "day" },
                Unit::Month => if plural { "mos" } else { "mo" },
                Unit::Year => if plural { "yrs" } else { "yr" },
            },
            PhraseStyle::Narrow => match unit {
                Unit::Second => "sec",
                Unit::Minute => "min",
                Unit::Hour => "hr",
                Unit::Day => "d",
                Unit::Month => "mo",
                Unit::Year => "yr",
            },
        };
        label.to_string()
    }
}
