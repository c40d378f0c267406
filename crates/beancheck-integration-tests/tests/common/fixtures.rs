//! Beans that satisfy every contract.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use beancheck_core::{
    Bean, BeanDescriptor, BeanError, BeanRegistry, PropertyDescriptor, Synthesize, Synthesizer,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NAMESPACE: &str = module_path!();

pub const SHAPE: &str = concat!(module_path!(), "::Shape");
pub const VEHICLE: &str = concat!(module_path!(), "::Vehicle");
pub const MOTOR_VEHICLE: &str = concat!(module_path!(), "::MotorVehicle");
pub const DOCUMENT: &str = concat!(module_path!(), "::Document");
pub const LEDGER: &str = concat!(module_path!(), "::Ledger");
pub const ENTRY: &str = concat!(module_path!(), "::Entry");

pub fn register(registry: &mut BeanRegistry) {
    populate(registry).expect("fixture catalogue registers cleanly");
}

fn populate(registry: &mut BeanRegistry) -> Result<(), BeanError> {
    registry
        .declare(BeanDescriptor::abstract_type(SHAPE).discriminated_by("type"))?
        .declare(BeanDescriptor::abstract_type(VEHICLE).discriminated_by("kind"))?
        .declare(
            BeanDescriptor::abstract_type(MOTOR_VEHICLE)
                .extends(VEHICLE)
                .discriminated_by("kind"),
        )?
        .declare(BeanDescriptor::abstract_type(DOCUMENT).discriminated_by("doc"))?
        .declare(BeanDescriptor::abstract_type(LEDGER).extends(DOCUMENT))?
        .declare(
            BeanDescriptor::abstract_type(ENTRY)
                .extends(LEDGER)
                .discriminated_by("entry"),
        )?
        .register::<Point>()?
        .register::<Circle>()?
        .register::<Square>()?
        .register::<Triangle>()?
        .register::<Car>()?
        .register::<Bicycle>()?
        .register::<Payment>()?
        .register::<Memo>()?
        .register::<Appointment>()?
        .register::<Itinerary>()?
        .register::<Lattice>()?
        .register::<Node>()?;
    Ok(())
}

// -- Plain record ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Synthesize for Point {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Point {
            x: synth.generate(),
            y: synth.generate(),
        }
    }
}

impl Bean for Point {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<i32>("x"))
            .property(PropertyDescriptor::of::<i32>("y"))
            .record()
    }
}

// -- Shape family: one discriminated root ---------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Synthesize for Circle {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Circle {
            radius: synth.generate(),
        }
    }
}

impl Bean for Circle {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(SHAPE)
            .property(PropertyDescriptor::of::<f64>("radius"))
            .record()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub side: f32,
}

impl Synthesize for Square {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Square {
            side: synth.generate(),
        }
    }
}

impl Bean for Square {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(SHAPE)
            .property(PropertyDescriptor::of::<f32>("side"))
            .record()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: u16,
    pub height: u16,
}

impl Synthesize for Triangle {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Triangle {
            base: synth.generate(),
            height: synth.generate(),
        }
    }
}

impl Bean for Triangle {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(SHAPE)
            .tagged("tri")
            .property(PropertyDescriptor::of::<u16>("base"))
            .property(PropertyDescriptor::of::<u16>("height"))
            .record()
    }
}

// -- Vehicle family: annotated chain collapses to the top -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub wheels: u8,
    pub plate: String,
}

impl Synthesize for Car {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Car {
            wheels: synth.generate(),
            plate: synth.generate(),
        }
    }
}

impl Bean for Car {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(MOTOR_VEHICLE)
            .property(PropertyDescriptor::of::<u8>("wheels"))
            .property(PropertyDescriptor::of::<String>("plate"))
            .record()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bicycle {
    pub gears: u8,
}

impl Synthesize for Bicycle {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Bicycle {
            gears: synth.generate(),
        }
    }
}

impl Bean for Bicycle {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(VEHICLE)
            .property(PropertyDescriptor::of::<u8>("gears"))
            .record()
    }
}

// -- Document family: an unannotated link stops the walk ------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: i64,
    pub currency: String,
}

impl Synthesize for Payment {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Payment {
            amount: synth.generate(),
            currency: synth.generate(),
        }
    }
}

impl Bean for Payment {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(ENTRY)
            .property(PropertyDescriptor::of::<i64>("amount"))
            .property(PropertyDescriptor::of::<String>("currency"))
            .record()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub text: String,
}

impl Synthesize for Memo {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Memo {
            text: synth.generate(),
        }
    }
}

impl Bean for Memo {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .extends(LEDGER)
            .property(PropertyDescriptor::of::<String>("text"))
            .record()
    }
}

// -- Temporal values ------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub at: DateTime<Utc>,
    pub day: NaiveDate,
    pub local: NaiveDateTime,
    pub time: NaiveTime,
    pub length: Duration,
}

impl Synthesize for Appointment {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Appointment {
            at: synth.generate(),
            day: synth.generate(),
            local: synth.generate(),
            time: synth.generate(),
            length: synth.generate(),
        }
    }
}

impl Bean for Appointment {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<DateTime<Utc>>("at"))
            .property(PropertyDescriptor::of::<NaiveDate>("day"))
            .property(PropertyDescriptor::of::<NaiveDateTime>("local"))
            .property(PropertyDescriptor::of::<NaiveTime>("time"))
            .property(PropertyDescriptor::of::<Duration>("length"))
            .record()
    }
}

// -- Nested containers ----------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub departs_at: DateTime<Utc>,
}

impl Synthesize for Leg {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Leg {
            from: synth.generate(),
            to: synth.generate(),
            departs_at: synth.generate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: Uuid,
    pub origin: Point,
    pub legs: Vec<Leg>,
    pub tags: BTreeSet<String>,
    pub fares: BTreeMap<String, u32>,
    pub seats: HashMap<String, u16>,
    pub note: Option<String>,
}

impl Synthesize for Itinerary {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Itinerary {
            id: synth.generate(),
            origin: synth.generate(),
            legs: synth.generate(),
            tags: synth.generate(),
            fares: synth.generate(),
            seats: synth.generate(),
            note: synth.generate(),
        }
    }
}

impl Bean for Itinerary {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<Uuid>("id"))
            .property(PropertyDescriptor::of::<Point>("origin"))
            .property(PropertyDescriptor::of::<Vec<Leg>>("legs"))
            .property(PropertyDescriptor::of::<BTreeSet<String>>("tags"))
            .property(PropertyDescriptor::of::<BTreeMap<String, u32>>("fares"))
            .property(PropertyDescriptor::of::<HashMap<String, u16>>("seats"))
            .property(PropertyDescriptor::of::<Option<String>>("note"))
            .record()
    }
}

/// Deeply nested but not recursive; every level must come back populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    pub cells: Vec<Vec<Vec<Vec<Vec<i32>>>>>,
    pub layered: Option<Option<Option<Option<Option<i32>>>>>,
    pub rows: BTreeMap<String, Vec<Vec<Option<Point>>>>,
}

impl Lattice {
    /// Whether no container is empty and no option is `None` at any level.
    pub fn fully_populated(&self) -> bool {
        let cells = &self.cells;
        let cells_full = !cells.is_empty()
            && cells.iter().all(|a| !a.is_empty())
            && cells.iter().flatten().all(|b| !b.is_empty())
            && cells.iter().flatten().flatten().all(|c| !c.is_empty())
            && cells.iter().flatten().flatten().flatten().all(|d| !d.is_empty());
        let layered_full = matches!(self.layered, Some(Some(Some(Some(Some(_))))));
        let rows_full = !self.rows.is_empty()
            && self.rows.values().all(|grid| !grid.is_empty())
            && self.rows.values().flatten().all(|row| !row.is_empty())
            && self.rows.values().flatten().flatten().all(Option::is_some);
        cells_full && layered_full && rows_full
    }
}

impl Synthesize for Lattice {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Lattice {
            cells: synth.generate(),
            layered: synth.generate(),
            rows: synth.generate(),
        }
    }
}

impl Bean for Lattice {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<Vec<Vec<Vec<Vec<Vec<i32>>>>>>("cells"))
            .property(PropertyDescriptor::of::<Option<Option<Option<Option<Option<i32>>>>>>(
                "layered",
            ))
            .property(PropertyDescriptor::of::<BTreeMap<String, Vec<Vec<Option<Point>>>>>("rows"))
            .record()
    }
}

/// Self-recursive; synthesis terminates at the configured depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub value: i32,
    pub children: Vec<Node>,
}

impl Node {
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Node::height).max().unwrap_or(0)
    }
}

impl Synthesize for Node {
    fn synthesize(synth: &mut Synthesizer) -> Self {
        Node {
            value: synth.generate(),
            children: synth.generate(),
        }
    }
}

impl Bean for Node {
    fn descriptor() -> BeanDescriptor {
        BeanDescriptor::concrete::<Self>()
            .property(PropertyDescriptor::of::<i32>("value"))
            .property(PropertyDescriptor::of::<Vec<Node>>("children"))
            .record()
    }
}
