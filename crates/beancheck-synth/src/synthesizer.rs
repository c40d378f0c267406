//! # Synthesizer Context
//!
//! The [`Synthesize`] trait and the [`Synthesizer`] context threaded through
//! every recursive call. The context carries the RNG, the active
//! [`SynthConfig`], and the current recursion depth.
//!
//! Depth counts recursion, not nesting: it rises only when a type is
//! synthesized inside a value of the same type. `Vec<Vec<Vec<i32>>>` or a
//! chain of distinct beans stays at depth 0 however deep it goes, so only
//! genuinely recursive types are ever cut short.

use std::any::TypeId;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::temporal::TemporalBounds;

/// A type that can produce a fully-populated random instance of itself.
///
/// Bean impls synthesize one value per field through
/// [`Synthesizer::generate`], in constructor order:
///
/// ```
/// use beancheck_synth::{Synthesize, Synthesizer};
///
/// struct Point { x: i32, y: i32 }
///
/// impl Synthesize for Point {
///     fn synthesize(synth: &mut Synthesizer) -> Self {
///         Point { x: synth.generate(), y: synth.generate() }
///     }
/// }
///
/// let a: Point = Synthesizer::seeded(7).generate();
/// let b: Point = Synthesizer::seeded(7).generate();
/// assert_eq!((a.x, a.y), (b.x, b.y));
/// ```
pub trait Synthesize: Sized + 'static {
    /// Produce a random instance, drawing all randomness from `synth`.
    fn synthesize(synth: &mut Synthesizer) -> Self;
}

/// Tunables for a synthesis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthConfig {
    /// Number of times a type may recur inside itself before its containers
    /// come back empty and its options `None`. Values below 1 act as 1.
    pub max_depth: usize,
    /// Upper bound on generated container sizes (lower bound is always 1).
    pub max_collection_len: usize,
    /// Range policy for instants, dates and durations.
    pub temporal: TemporalBounds,
}

impl SynthConfig {
    /// Default depth limit for recursive types.
    pub const DEFAULT_MAX_DEPTH: usize = 4;
    /// Default container size bound.
    pub const DEFAULT_MAX_COLLECTION_LEN: usize = 4;

    /// Configuration with a fixed temporal horizon, independent of the clock.
    pub fn with_horizon(horizon_secs: i64) -> Self {
        Self {
            temporal: TemporalBounds::fixed(horizon_secs),
            ..Self::default()
        }
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_collection_len: Self::DEFAULT_MAX_COLLECTION_LEN,
            temporal: TemporalBounds::current(),
        }
    }
}

/// Seeded synthesis context.
///
/// Not `Clone`: two contexts sharing one RNG stream would make failures
/// irreproducible. Build a fresh context per sample instead.
#[derive(Debug)]
pub struct Synthesizer {
    rng: StdRng,
    config: SynthConfig,
    seed: u64,
    depth: usize,
    active: HashMap<TypeId, usize>,
}

impl Synthesizer {
    /// Create a context from a seed and configuration.
    pub fn new(seed: u64, config: SynthConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            seed,
            depth: 0,
            active: HashMap::new(),
        }
    }

    /// Create a context with the default configuration.
    pub fn seeded(seed: u64) -> Self {
        Self::new(seed, SynthConfig::default())
    }

    /// Synthesize a value of type `T`.
    ///
    /// Every generator reaches its components through this method, so the
    /// set of types under construction is always known. Entering a type that
    /// is already active raises the depth to that type's re-entry count for
    /// the duration of the call.
    pub fn generate<T: Synthesize>(&mut self) -> T {
        let key = TypeId::of::<T>();
        let entries = self.active.entry(key).or_insert(0);
        *entries += 1;
        let outer = self.depth;
        self.depth = outer.max(*entries - 1);
        let value = T::synthesize(self);
        self.depth = outer;
        if let Some(entries) = self.active.get_mut(&key) {
            *entries -= 1;
        }
        value
    }

    /// The seed this context was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The active configuration.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Current recursion depth: 0 until some type recurs inside itself.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether recursion has reached [`SynthConfig::max_depth`]. Never true
    /// outside a recursive type.
    pub fn depth_exhausted(&self) -> bool {
        self.depth > 0 && self.depth >= self.config.max_depth
    }

    /// Direct access to the RNG for custom generators.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Target size for the next container: `1..=max_collection_len`, or 0
    /// once a recursive type has reached the depth limit.
    pub fn collection_len(&mut self) -> usize {
        if self.depth_exhausted() {
            return 0;
        }
        let max = self.config.max_collection_len.max(1);
        self.rng.gen_range(1..=max)
    }
}

/// Derive the seed of one sample from a suite seed, a case label and the
/// sample index.
///
/// Stable across platforms and releases (SplitMix64 over the label bytes), so
/// a seed printed in a failure report replays on any machine.
pub fn derive_seed(base: u64, label: &str, sample: u64) -> u64 {
    let mut state = splitmix64(base);
    for byte in label.bytes() {
        state = splitmix64(state ^ u64::from(byte));
    }
    splitmix64(state ^ sample)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
