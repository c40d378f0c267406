//! Beans that each violate one contract.

use std::cell::Cell;

use beancheck_core::{
    Bean, BeanDescriptor, BeanError, BeanRegistry, ConstructorParam, PropertyDescriptor,
    Synthesize, Synthesizer,
};
use serde::{Deserialize, Deserializer, Serialize};

pub const NAMESPACE: &str = module_path!();

pub const ANNOTATED: &str = concat!(module_path!(), "::Annotated");

pub fn register(registry: &mut BeanRegistry) {
    populate(registry).expect("defect catalogue registers cleanly");
}

fn populate(registry: &mut BeanRegistry) -> Result<(), BeanError> {
    registry
        .declare(BeanDescriptor::abstract_type(ANNOTATED).discriminated_by("type"))?
        .register::<Counter>()?
        .register::<Gauge>()?
        .register::<Partial>()?
        .register::<Mistyped>()?
        .register::<Undescribed>()?
        .register::<Lossy>()?
        .register::<Colliding>()?;
    Ok(())
}

/// Exposes `set_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub count: u32,
}

impl Counter {
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }
}

impl Synthesize for Counter {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Counter {
            count: synth.generate(),
        }
    }
}

impl Bean for Counter {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<u32>("count").with_mutator("set_count"))
            .record()
    }
}

/// Interior-mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub level: Cell<i32>,
}

impl Synthesize for Gauge {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Gauge {
            level: Cell::new(synth.generate()),
        }
    }
}

impl Bean for Gauge {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<Cell<i32>>("level").mutable())
            .record()
    }
}

/// Constructor omits `age`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partial {
    pub name: String,
    pub age: i32,
}

impl Synthesize for Partial {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Partial {
            name: synth.generate(),
            age: synth.generate(),
        }
    }
}

impl Bean for Partial {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<String>("name"))
            .property(PropertyDescriptor::of::<i32>("age"))
            .constructor(vec![ConstructorParam::of::<String>("name")])
    }
}

/// Constructor takes `age` with a different type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistyped {
    pub age: i32,
}

impl Synthesize for Mistyped {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Mistyped {
            age: synth.generate(),
        }
    }
}

impl Bean for Mistyped {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<i32>("age"))
            .constructor(vec![ConstructorParam::of::<u64>("age")])
    }
}

/// Serializes `revision`, which the descriptor never mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Undescribed {
    pub title: String,
    pub revision: u16,
}

impl Synthesize for Undescribed {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Undescribed {
            title: synth.generate(),
            revision: synth.generate(),
        }
    }
}

impl Bean for Undescribed {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<String>("title"))
            .record()
    }
}

/// Drops the sign of `balance` when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lossy {
    #[serde(deserialize_with = "unsigned")]
    pub balance: i64,
}

fn unsigned<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(i64::deserialize(deserializer)?.wrapping_abs())
}

impl Synthesize for Lossy {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Lossy {
            balance: synth.generate(),
        }
    }
}

impl Bean for Lossy {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<i64>("balance"))
            .record()
    }
}

/// Emits a property named like its family's discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colliding {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Synthesize for Colliding {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Colliding {
            kind: synth.generate(),
        }
    }
}

impl Bean for Colliding {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(ANNOTATED)
            .property(PropertyDescriptor::of::<String>("type"))
            .record()
    }
}
