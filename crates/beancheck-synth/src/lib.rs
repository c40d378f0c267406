//! # beancheck-synth — Random Instance Synthesis
//!
//! Produces fully-populated, pseudo-random values of arbitrary types for the
//! round-trip verifier. Every bean type in the workspace implements
//! [`Synthesize`]; the impls in this crate cover the leaves (primitives,
//! strings, identifiers, temporal values) and the generic containers, so a
//! bean's impl is nothing more than one `synth.generate()` per field.
//!
//! ## Key Design Principles
//!
//! 1. **Seed in, value out.** A [`Synthesizer`] owns a `StdRng` seeded from a
//!    `u64`. Identical seed and [`SynthConfig`] always reproduce the identical
//!    object graph, so a failing sample can be replayed from its seed alone.
//!
//! 2. **Total coverage.** `Option` is always `Some`, containers always hold at
//!    least one element. A field left at its empty/absent value is a field
//!    whose serialization was never exercised.
//!
//! 3. **Wire-representable temporal values.** Instants are drawn from
//!    `[-horizon, +horizon)` epoch seconds (see [`TemporalBounds`]). Values
//!    that exist in memory but cannot survive the wire are never produced.
//!
//! 4. **Bounded recursion.** A type synthesized inside a value of the same
//!    type terminates at [`SynthConfig::max_depth`]: at the limit `Option`
//!    yields `None` and containers yield empty collections. Non-recursive
//!    nesting is never cut short, however deep.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `beancheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod primitives;
pub mod synthesizer;
pub mod temporal;

pub use synthesizer::{derive_seed, SynthConfig, Synthesize, Synthesizer};
pub use temporal::{TemporalBounds, MAX_HORIZON_SECS};
