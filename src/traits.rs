//! Common trait definitions
//!
//! Defines traits for dependency injection and testing, including the
//! TimeSource and PhraseRenderer abstractions. These traits keep the
//! threshold selection and unit math independent of any particular
//! wall clock or localization backend.

use chrono::{DateTime, Utc};

use crate::phrase::{NumericPolicy, Unit};

/// Trait for wall-clock access
///
/// Abstracts the host's current-time source so that relative formatting
/// can be tested deterministically. Production code uses `SystemClock`,
/// tests can use `FixedClock`.
pub trait TimeSource: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Trait for locale-aware relative-phrase rendering
///
/// Converts a signed integer magnitude and a unit into natural-language
/// relative text ("3 days ago", "in 2 hours"). The built-in backend is
/// `EnglishPhrases`; alternative implementations can supply other
/// locales or styles.
pub trait PhraseRenderer: Send + Sync {
    /// Renders a signed value and unit as a relative phrase
    ///
    /// Positive values are future-framed, negative values past-framed.
    /// Under `NumericPolicy::Auto` the renderer may substitute an
    /// idiomatic word for values of ±1 (e.g. "yesterday" instead of
    /// "1 day ago").
    fn render(&self, value: i64, unit: Unit, numeric: NumericPolicy) -> String;

    /// Returns the bare label for a unit, pluralized when `plural` is true
    ///
    /// Used by verbose multi-term output such as "2 years 3 months ago".
    fn unit_label(&self, unit: Unit, plural: bool) -> String;
}
