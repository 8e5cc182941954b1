//! Number, currency and percent formatting
//!
//! Locale-aware numeric rendering with grouped integer digits and
//! bounded fraction digits. Locale support is deliberately small: a
//! parsed language tag selects grouping and decimal separators, and a
//! fixed symbol table covers the common currencies. Non-finite input
//! formats as "NaN" or "∞" rather than failing.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A parsed language tag (e.g. "en-US", "de", "fr-FR")
///
/// Only the language and region subtags are retained; any other
/// subtags are ignored. The language selects the digit separators used
/// by the formatting functions below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parses a language tag
    ///
    /// The language subtag must be 2-3 ASCII letters. A region subtag
    /// of 2 letters or 3 digits is kept when present; anything else is
    /// skipped.
    ///
    /// # Errors
    /// Returns an error if the tag is empty or the language subtag is
    /// malformed.
    pub fn new(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            bail!("invalid language tag: empty string");
        }

        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or_default().to_lowercase();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            bail!("invalid language subtag: '{}'", language);
        }

        let region = parts
            .find(|part| {
                (part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()))
                    || (part.len() == 3 && part.bytes().all(|b| b.is_ascii_digit()))
            })
            .map(|part| part.to_uppercase());

        Ok(Locale { language, region })
    }

    /// The lowercased language subtag
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The tag in canonical "language-REGION" form
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }

    /// Grouping and decimal separators for this language
    fn separators(&self) -> (char, char) {
        match self.language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "da" | "tr" | "id" => ('.', ','),
            "fr" | "ru" | "sv" | "fi" | "pl" | "cs" | "nb" => ('\u{a0}', ','),
            _ => (',', '.'),
        }
    }
}

impl Default for Locale {
    /// "en-US"
    fn default() -> Self {
        Locale {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

/// Options controlling numeric rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormatOptions {
    /// Minimum fraction digits; shorter fractions are zero-padded
    pub min_fraction_digits: usize,
    /// Maximum fraction digits; the value is rounded to this precision
    pub max_fraction_digits: usize,
    /// Whether to insert grouping separators in the integer part
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        NumberFormatOptions {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

/// Formats a number with locale-aware separators
///
/// The integer part is grouped in threes, the fraction is rounded to at
/// most `max_fraction_digits` and padded to at least
/// `min_fraction_digits`. NaN and infinities render as "NaN" and "∞".
///
/// # Arguments
/// - `value` - The number to format
/// - `locale` - Locale selecting the separator characters
/// - `options` - Fraction-digit bounds and grouping switch
pub fn format_number(value: f64, locale: &Locale, options: &NumberFormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let negative = value < 0.0;
    let rendered = format!("{:.*}", options.max_fraction_digits, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (rendered, String::new()),
    };

    let mut fraction = frac_part.trim_end_matches('0').to_string();
    while fraction.len() < options.min_fraction_digits {
        fraction.push('0');
    }

    let (group_sep, decimal_sep) = locale.separators();
    let integer = if options.use_grouping {
        group_digits(&int_part, group_sep)
    } else {
        int_part
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push(decimal_sep);
        out.push_str(&fraction);
    }
    out
}

/// Inserts a grouping separator every three digits, counting from the right
fn group_digits(digits: &str, separator: char) -> String {
    let count = digits.len();
    let mut out = String::with_capacity(count + count / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Formats an amount of money ("$1,234.56")
///
/// Known currency codes render with their symbol as prefix; unknown
/// 3-letter codes fall back to the uppercased code followed by a space.
/// Fraction digits are fixed at 2, except zero-decimal currencies
/// (JPY, KRW).
///
/// # Arguments
/// - `amount` - The monetary amount
/// - `code` - ISO 4217 currency code (e.g. "USD")
/// - `locale` - Locale selecting the separator characters
///
/// # Errors
/// Returns an error if `code` is not three ASCII letters.
pub fn format_currency(amount: f64, code: &str, locale: &Locale) -> Result<String> {
    let code = code.trim();
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        bail!("invalid currency code: '{}'", code);
    }
    let code = code.to_uppercase();

    let fraction_digits = match code.as_str() {
        "JPY" | "KRW" => 0,
        _ => 2,
    };
    let options = NumberFormatOptions {
        min_fraction_digits: fraction_digits,
        max_fraction_digits: fraction_digits,
        use_grouping: true,
    };

    let body = format_number(amount.abs(), locale, &options);
    let sign = if amount < 0.0 { "-" } else { "" };
    Ok(match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, body),
        None => format!("{}{} {}", sign, code, body),
    })
}

/// Symbols for the commonly formatted currencies
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "KRW" => Some("₩"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Formats a ratio as a percentage ("45.67%")
///
/// The value is multiplied by 100 and rendered with at most two
/// fraction digits.
pub fn format_percent(value: f64, locale: &Locale) -> String {
    let options = NumberFormatOptions {
        min_fraction_digits: 0,
        max_fraction_digits: 2,
        use_grouping: true,
    };
    format!("{}%", format_number(value * 100.0, locale, &options))
}

/// Clamps a value to the inclusive range `[min, max]`
///
/// NaN input is returned unchanged. If `min > max` the bounds are
/// applied in order, mirroring the permissive behavior of the
/// formatting functions rather than panicking.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
