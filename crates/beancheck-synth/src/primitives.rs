//! # Leaf and Container Generators
//!
//! [`Synthesize`] impls for primitives, strings, identifiers and the standard
//! containers.
//!
//! Integers span their full range, negatives included: a field whose codec
//! only breaks on negative numbers must get a chance to break. Floats are
//! finite, and `f32` values are exactly representable so that the textual
//! form parses back to the same bits.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use crate::synthesizer::{Synthesize, Synthesizer};

const MAX_STRING_LEN: usize = 12;

impl Synthesize for bool {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        synth.rng().gen()
    }
}

macro_rules! impl_synthesize_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Synthesize for $t {
                fn synthesize(synth: &mut Synthesizer) -> Self {
                    synth.rng().gen()
                }
            }
        )*
    };
}

impl_synthesize_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Synthesize for f32 {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        // Integers below 2^24 divided by a power of two are exact in f32.
        let scaled = synth.rng().gen_range(-1_000_000i32..=1_000_000);
        scaled as f32 / 64.0
    }
}

impl Synthesize for f64 {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        synth.rng().gen_range(-1.0e12..1.0e12)
    }
}

impl Synthesize for char {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        char::from(synth.rng().sample(Alphanumeric))
    }
}

impl Synthesize for String {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let rng = synth.rng();
        let len = rng.gen_range(1..=MAX_STRING_LEN);
        // Alphabetic lead keeps the value a plain string in every text format.
        let lead = if rng.gen() {
            rng.gen_range(b'a'..=b'z')
        } else {
            rng.gen_range(b'A'..=b'Z')
        };
        let mut out = String::with_capacity(len);
        out.push(char::from(lead));
        out.extend((1..len).map(|_| char::from(rng.sample(Alphanumeric))));
        out
    }
}

impl Synthesize for Uuid {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Uuid::from_bytes(synth.rng().gen())
    }
}

impl<T: Synthesize> Synthesize for Option<T> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        if synth.depth_exhausted() {
            return None;
        }
        Some(synth.generate())
    }
}

impl<T: Synthesize> Synthesize for Box<T> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Box::new(synth.generate())
    }
}

impl<T: Synthesize> Synthesize for Vec<T> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let len = synth.collection_len();
        (0..len).map(|_| synth.generate()).collect()
    }
}

impl<T: Synthesize> Synthesize for VecDeque<T> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Vec::<T>::synthesize(synth).into()
    }
}

/// Fill a set-like collection up to `len` distinct elements.
///
/// Element types with few inhabitants (e.g. `bool`) cannot always reach the
/// target; attempts are capped, and the first insert always succeeds.
fn fill_distinct<C, T>(
    synth: &mut Synthesizer,
    len: usize,
    mut insert: impl FnMut(&mut C, T),
    empty: C,
    count: impl Fn(&C) -> usize,
) -> C
where
    T: Synthesize,
{
    let mut out = empty;
    let attempts = len.saturating_mul(8);
    for _ in 0..attempts {
        if count(&out) >= len {
            break;
        }
        insert(&mut out, synth.generate());
    }
    out
}

impl<T: Synthesize + Ord> Synthesize for BTreeSet<T> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let len = synth.collection_len();
        fill_distinct(
            synth,
            len,
            |set: &mut BTreeSet<T>, v| {
                set.insert(v);
            },
            BTreeSet::new(),
            BTreeSet::len,
        )
    }
}

impl<T: Synthesize + Hash + Eq> Synthesize for HashSet<T> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let len = synth.collection_len();
        fill_distinct(
            synth,
            len,
            |set: &mut HashSet<T>, v| {
                set.insert(v);
            },
            HashSet::new(),
            HashSet::len,
        )
    }
}

impl<K: Synthesize + Ord, V: Synthesize> Synthesize for BTreeMap<K, V> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let len = synth.collection_len();
        fill_distinct(
            synth,
            len,
            |map: &mut BTreeMap<K, V>, (k, v): (K, V)| {
                map.insert(k, v);
            },
            BTreeMap::new(),
            BTreeMap::len,
        )
    }
}

impl<K: Synthesize + Hash + Eq, V: Synthesize> Synthesize for HashMap<K, V> {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        let len = synth.collection_len();
        fill_distinct(
            synth,
            len,
            |map: &mut HashMap<K, V>, (k, v): (K, V)| {
                map.insert(k, v);
            },
            HashMap::new(),
            HashMap::len,
        )
    }
}

macro_rules! impl_synthesize_tuple {
    ($($name:ident),+) => {
        impl<$($name: Synthesize),+> Synthesize for ($($name,)+) {
            fn synthesize(synth: &mut Synthesizer) -> Self {
                ($(synth.generate::<$name>(),)+)
            }
        }
    };
}

impl_synthesize_tuple!(A);
impl_synthesize_tuple!(A, B);
impl_synthesize_tuple!(A, B, C);
impl_synthesize_tuple!(A, B, C, D);
