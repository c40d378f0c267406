//! # Temporal Generators — Wire-Representable Instants
//!
//! Instants, dates and durations are drawn from a symmetric window around the
//! Unix epoch whose half-width is the *horizon* (by default, the current epoch
//! second). A consumer that stores instants as signed epoch seconds or parses
//! them with a four-digit year can represent every value in the window, so a
//! round-trip failure on a temporal field is a codec defect, never a range
//! artifact.
//!
//! ## Security Invariant
//!
//! Every synthesized instant `t` satisfies `-horizon <= t.timestamp() < horizon`.
//! The window is half-open so that a value with non-zero nanoseconds never
//! lands past the upper bound.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use rand::Rng;

use crate::synthesizer::{Synthesize, Synthesizer};

const NANOS_PER_SEC: u32 = 1_000_000_000;
const SECS_PER_DAY: u32 = 86_400;

/// Widest horizon accepted, kept inside chrono's representable range
/// (roughly year 255000 either side of the epoch).
pub const MAX_HORIZON_SECS: i64 = 8_000_000_000_000;

/// Symmetric epoch window for synthesized temporal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalBounds {
    horizon_secs: i64,
}

impl TemporalBounds {
    /// Window of plus/minus the current epoch second.
    pub fn current() -> Self {
        Self::fixed(Utc::now().timestamp())
    }

    /// Window of plus/minus `horizon_secs`. Negative inputs are mirrored, a
    /// zero horizon is widened to one second so the window is never empty, and
    /// the result is capped at [`MAX_HORIZON_SECS`].
    pub fn fixed(horizon_secs: i64) -> Self {
        Self {
            horizon_secs: horizon_secs
                .checked_abs()
                .unwrap_or(i64::MAX)
                .clamp(1, MAX_HORIZON_SECS),
        }
    }

    /// Half-width of the window in seconds.
    pub fn horizon_secs(&self) -> i64 {
        self.horizon_secs
    }

    /// Smallest epoch second that may be produced (inclusive).
    pub fn min_secs(&self) -> i64 {
        -self.horizon_secs
    }

    /// Upper epoch-second bound (exclusive).
    pub fn max_secs(&self) -> i64 {
        self.horizon_secs
    }

    /// Whether `instant` lies inside the window.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        let secs = instant.timestamp();
        secs >= self.min_secs() && secs < self.max_secs()
    }

    /// Draw an instant uniformly from the window.
    pub fn sample(&self, synth: &mut Synthesizer) -> DateTime<Utc> {
        let (min, max) = (self.min_secs(), self.max_secs());
        let rng = synth.rng();
        let secs = rng.gen_range(min..max);
        let nanos = rng.gen_range(0..NANOS_PER_SEC);
        DateTime::from_timestamp(secs, nanos).unwrap_or_default()
    }
}

impl Default for TemporalBounds {
    fn default() -> Self {
        Self::current()
    }
}

impl Synthesize for DateTime<Utc> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let bounds = synth.config().temporal;
        bounds.sample(synth)
    }
}

impl Synthesize for NaiveDateTime {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        DateTime::<Utc>::synthesize(synth).naive_utc()
    }
}

impl Synthesize for NaiveDate {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        DateTime::<Utc>::synthesize(synth).date_naive()
    }
}

impl Synthesize for NaiveTime {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let rng = synth.rng();
        let secs = rng.gen_range(0..SECS_PER_DAY);
        let nanos = rng.gen_range(0..NANOS_PER_SEC);
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap_or_default()
    }
}

impl Synthesize for std::time::Duration {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let horizon = synth.config().temporal.horizon_secs().unsigned_abs();
        let rng = synth.rng();
        let secs = rng.gen_range(0..horizon);
        let nanos = rng.gen_range(0..NANOS_PER_SEC);
        std::time::Duration::new(secs, nanos)
    }
}

impl Synthesize for TimeDelta {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let horizon = synth.config().temporal.horizon_secs();
        let rng = synth.rng();
        let secs = rng.gen_range(-horizon..horizon);
        let nanos = rng.gen_range(0..NANOS_PER_SEC);
        TimeDelta::new(secs, nanos).unwrap_or_default()
    }
}
