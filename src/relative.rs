//! Relative time formatting
//!
//! Threshold-based selection of a display unit for a signed time
//! difference, plus elapsed-time breakdowns. One shared threshold table
//! drives every operation here, so the unit boundaries cannot drift
//! between the phrase-based and breakdown-based formatters.
//!
//! All functions are pure: the wall clock and the phrase backend are
//! passed in explicitly (see `TimeSource` and `PhraseRenderer`).

use chrono::{DateTime, Utc};

use crate::phrase::{NumericPolicy, Unit};
use crate::traits::{PhraseRenderer, TimeSource};

/// Unit-selection table, checked in ascending order of magnitude
///
/// The first entry whose bound exceeds the absolute difference in
/// seconds determines the display unit. The final bound is unbounded,
/// so a unit is always found.
const THRESHOLDS: [(Unit, i64); 6] = [
    (Unit::Second, 60),
    (Unit::Minute, 3_600),
    (Unit::Hour, 86_400),
    (Unit::Day, 2_592_000),
    (Unit::Month, 31_536_000),
    (Unit::Year, i64::MAX),
];

/// Elapsed duration below which `verbose_ago` reports "just now"
const JUST_NOW_SECS: i64 = 5;

/// Signed whole-second difference between two instants
///
/// Positive when `target` is after `base`. Sub-second differences are
/// rounded, matching the reported-value rounding below.
fn diff_seconds(target: DateTime<Utc>, base: DateTime<Utc>) -> i64 {
    let millis = target.signed_duration_since(base).num_milliseconds();
    (millis as f64 / 1000.0).round() as i64
}

/// Selects a display unit and reported value for a signed difference
///
/// The reported value is `round(diff / divisor)` with the sign of the
/// difference preserved. Falls back to zero seconds if no threshold
/// matches, which cannot happen while the last bound is unbounded.
fn select_unit(diff: i64) -> (Unit, i64) {
    for (unit, bound) in THRESHOLDS {
        if diff.abs() < bound {
            let value = (diff as f64 / unit.seconds() as f64).round() as i64;
            return (unit, value);
        }
    }
    (Unit::Second, 0)
}

/// Formats an instant relative to an explicit base instant
///
/// Produces phrases like "3 days ago" or "in 2 hours". Positive
/// differences are future-framed, negative past-framed. The renderer
/// is invoked with `NumericPolicy::Auto`, so it may substitute
/// idiomatic words for ±1 units (e.g. "yesterday").
///
/// # Arguments
/// - `target` - The instant being described
/// - `base` - The reference instant the difference is measured from
/// - `phrases` - Locale-aware phrase backend
pub fn relative_time(
    target: DateTime<Utc>,
    base: DateTime<Utc>,
    phrases: &dyn PhraseRenderer,
) -> String {
    let (unit, value) = select_unit(diff_seconds(target, base));
    phrases.render(value, unit, NumericPolicy::Auto)
}

/// Formats an instant relative to the current time
///
/// Convenience variant of [`relative_time`] with `base = clock.now()`.
///
/// # Arguments
/// - `target` - The instant being described
/// - `clock` - Wall-clock source supplying the base instant
/// - `phrases` - Locale-aware phrase backend
pub fn relative_time_from_now(
    target: DateTime<Utc>,
    clock: &dyn TimeSource,
    phrases: &dyn PhraseRenderer,
) -> String {
    relative_time(target, clock.now(), phrases)
}

/// Formats an instant as a past-relative phrase ("2 hours ago")
///
/// One-way framing: the reported value is forced non-positive before
/// rendering, so the output reads as past-relative even if `past` is
/// actually ahead of the clock at call time.
///
/// # Arguments
/// - `past` - The instant being described
/// - `clock` - Wall-clock source supplying the base instant
/// - `phrases` - Locale-aware phrase backend
pub fn time_ago(
    past: DateTime<Utc>,
    clock: &dyn TimeSource,
    phrases: &dyn PhraseRenderer,
) -> String {
    let (unit, value) = select_unit(diff_seconds(past, clock.now()));
    phrases.render(-value.abs(), unit, NumericPolicy::Auto)
}

/// Formats a duration in seconds as a compact breakdown ("2d 4h 15m")
///
/// Decomposes the absolute duration into days, hours, minutes and
/// seconds by floor division, largest unit first. Zero-valued units are
/// omitted; when every part is zero the output is "0s", so the result
/// is never empty. Tokens are not localized.
pub fn elapsed_breakdown(diff_seconds: i64) -> String {
    let mut remainder = diff_seconds.unsigned_abs();
    let mut parts: Vec<String> = Vec::with_capacity(4);

    for (token, unit_secs) in [("d", 86_400), ("h", 3_600), ("m", 60), ("s", 1)] {
        let amount = remainder / unit_secs;
        remainder %= unit_secs;
        if amount > 0 {
            parts.push(format!("{}{}", amount, token));
        }
    }

    if parts.is_empty() {
        return "0s".to_string();
    }
    parts.join(" ")
}

/// Formats a past instant as a verbose phrase ("2 years 3 months ago")
///
/// Durations under five seconds short-circuit to "just now". Otherwise
/// units are walked largest to smallest and at most the two largest
/// non-zero terms are kept, each pluralized via the phrase backend's
/// unit labels.
///
/// # Arguments
/// - `past` - The instant being described
/// - `clock` - Wall-clock source supplying the base instant
/// - `phrases` - Locale-aware phrase backend providing unit labels
pub fn verbose_ago(
    past: DateTime<Utc>,
    clock: &dyn TimeSource,
    phrases: &dyn PhraseRenderer,
) -> String {
    let elapsed = diff_seconds(clock.now(), past);
    if elapsed < JUST_NOW_SECS {
        return "just now".to_string();
    }

    let mut remainder = elapsed;
    let mut terms: Vec<String> = Vec::with_capacity(2);
    for unit in Unit::DESCENDING {
        let amount = remainder / unit.seconds();
        if amount > 0 {
            terms.push(format!("{} {}", amount, phrases.unit_label(unit, amount > 1)));
            remainder -= amount * unit.seconds();
            if terms.len() == 2 {
                break;
            }
        }
    }

    format!("{} ago", terms.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::phrase::EnglishPhrases;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    const BASE: i64 = 1_000_000_000;

    #[test]
    fn test_sub_minute_differences_use_seconds() {
        let phrases = EnglishPhrases::default();
        for diff in 1..60 {
            let rendered = relative_time(at(BASE + diff), at(BASE), &phrases);
            assert!(
                rendered.contains("second"),
                "diff {} rendered as '{}'",
                diff,
                rendered
            );
        }
    }

    #[test]
    fn test_ninety_seconds_rounds_to_two_minutes() {
        let phrases = EnglishPhrases::default();
        assert_eq!(relative_time(at(BASE + 90), at(BASE), &phrases), "in 2 minutes");
        assert_eq!(relative_time(at(BASE - 90), at(BASE), &phrases), "2 minutes ago");
    }

    #[test]
    fn test_unit_boundaries() {
        let phrases = EnglishPhrases::default();
        // 3599s is still below the hour bound, so it stays in minutes
        // and rounds up to 60 of them.
        assert_eq!(
            relative_time(at(BASE + 3_599), at(BASE), &phrases),
            "in 60 minutes"
        );
        assert_eq!(relative_time(at(BASE + 3_600), at(BASE), &phrases), "in 1 hour");
        assert_eq!(
            relative_time(at(BASE + 2 * 86_400), at(BASE), &phrases),
            "in 2 days"
        );
        assert_eq!(
            relative_time(at(BASE + 3 * 2_592_000), at(BASE), &phrases),
            "in 3 months"
        );
        assert_eq!(
            relative_time(at(BASE + 2 * 31_536_000), at(BASE), &phrases),
            "in 2 years"
        );
    }

    #[test]
    fn test_auto_policy_substitutes_idioms() {
        let phrases = EnglishPhrases::default();
        assert_eq!(relative_time(at(BASE - 86_400), at(BASE), &phrases), "yesterday");
        assert_eq!(relative_time(at(BASE + 86_400), at(BASE), &phrases), "tomorrow");
        assert_eq!(
            relative_time(at(BASE + 31_536_000), at(BASE), &phrases),
            "next year"
        );
        assert_eq!(relative_time(at(BASE), at(BASE), &phrases), "now");
    }

    #[test]
    fn test_relative_time_from_now_uses_clock() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        assert_eq!(
            relative_time_from_now(at(BASE + 7_200), &clock, &phrases),
            "in 2 hours"
        );
    }

    #[test]
    fn test_time_ago_is_always_past_framed() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        assert_eq!(time_ago(at(BASE - 1_000), &clock, &phrases), "17 minutes ago");
        // A target ahead of the clock still reads as past.
        assert_eq!(time_ago(at(BASE + 1_000), &clock, &phrases), "17 minutes ago");
    }

    #[test]
    fn test_elapsed_breakdown_zero() {
        assert_eq!(elapsed_breakdown(0), "0s");
    }

    #[test]
    fn test_elapsed_breakdown_all_units() {
        // 86400 + 3600 + 60 + 1
        assert_eq!(elapsed_breakdown(90_061), "1d 1h 1m 1s");
    }

    #[test]
    fn test_elapsed_breakdown_omits_zero_units() {
        assert_eq!(elapsed_breakdown(86_400), "1d");
        assert_eq!(elapsed_breakdown(9_045), "2h 30m 45s");
        assert_eq!(elapsed_breakdown(2 * 86_400 + 4 * 3_600 + 15 * 60), "2d 4h 15m");
    }

    #[test]
    fn test_elapsed_breakdown_takes_magnitude_of_negative_input() {
        assert_eq!(elapsed_breakdown(-90), "1m 30s");
    }

    #[test]
    fn test_verbose_ago_just_now_boundary() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        assert_eq!(verbose_ago(at(BASE - 4), &clock, &phrases), "just now");
        assert_eq!(verbose_ago(at(BASE - 5), &clock, &phrases), "5 seconds ago");
    }

    #[test]
    fn test_verbose_ago_future_instant_reads_just_now() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        assert_eq!(verbose_ago(at(BASE + 600), &clock, &phrases), "just now");
    }

    #[test]
    fn test_verbose_ago_keeps_at_most_two_terms() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        // 1 year, 2 months and 3 days back: the days are dropped.
        let past = at(BASE - (31_536_000 + 2 * 2_592_000 + 3 * 86_400));
        assert_eq!(verbose_ago(past, &clock, &phrases), "1 year 2 months ago");
    }

    #[test]
    fn test_verbose_ago_pluralization() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        let past = at(BASE - (2 * 3_600 + 30 * 60));
        assert_eq!(verbose_ago(past, &clock, &phrases), "2 hours 30 minutes ago");
        let one_min = at(BASE - 60);
        assert_eq!(verbose_ago(one_min, &clock, &phrases), "1 minute ago");
    }

    #[test]
    fn test_verbose_ago_skips_zero_middle_units() {
        let phrases = EnglishPhrases::default();
        let clock = FixedClock::from_timestamp(BASE);
        // 1 day and 5 minutes: hours are zero and skipped, minutes kept.
        let past = at(BASE - (86_400 + 5 * 60));
        assert_eq!(verbose_ago(past, &clock, &phrases), "1 day 5 minutes ago");
    }

    #[test]
    fn test_half_unit_rounding_is_away_from_zero() {
        let phrases = EnglishPhrases::default();
        // 150s = 2.5 minutes rounds to 3 in both directions.
        assert_eq!(relative_time(at(BASE + 150), at(BASE), &phrases), "in 3 minutes");
        assert_eq!(relative_time(at(BASE - 150), at(BASE), &phrases), "3 minutes ago");
    }
}
