//! fmtkit - human-friendly formatting helpers
//!
//! A collection of small, pure formatting functions:
//! - Relative time phrases ("3 days ago", "in 2 hours", "just now")
//! - Elapsed-time breakdowns ("2d 4h 15m")
//! - Locale-aware number, currency and percent formatting
//! - Date rendering and string truncation/masking
//!
//! # Architecture
//!
//! The library is organized into several modules:
//! - `relative` - threshold-based relative time formatting (the core)
//! - `phrase` - units, rendering policies and the English phrase backend
//! - `clock` - wall-clock implementations of the TimeSource trait
//! - `traits` - TimeSource and PhraseRenderer abstractions
//! - `utils` - number, date and string helpers
//!
//! Formatting functions take their clock and phrase backend as explicit
//! parameters, so callers can inject a fixed clock and get
//! deterministic output in tests:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fmtkit::{time_ago, EnglishPhrases, FixedClock};
//!
//! let clock = FixedClock::from_timestamp(1_000_000_000);
//! let past = Utc.timestamp_opt(1_000_000_000 - 7_200, 0).unwrap();
//! assert_eq!(time_ago(past, &clock, &EnglishPhrases::default()), "2 hours ago");
//! ```

pub mod clock;
pub mod phrase;
pub mod relative;
pub mod traits;
pub mod utils;

// Re-export commonly used types and operations
pub use clock::{FixedClock, SystemClock};
pub use phrase::{EnglishPhrases, NumericPolicy, PhraseStyle, Unit};
pub use relative::{
    elapsed_breakdown, relative_time, relative_time_from_now, time_ago, verbose_ago,
};
pub use traits::{PhraseRenderer, TimeSource};
