//! Domain Entities
//!
//! Boats and slips are plain data. Each kind is tagged with the name of the
//! store collection it lives in; the store assigns ids on insert.

use crate::domain::value_objects::Occupancy;
use crate::error::{MarinaError, MarinaResult};
use kernel::id::Id;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub type BoatId = Id<Boat>;
pub type SlipId = Id<Slip>;

/// A record kind persisted as its own store collection
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name in the store
    const KIND: &'static str;
}

/// A record together with the id the store assigned to it.
///
/// Serializes with the id merged into the record body:
/// `{"id": 7, "name": "Sea Breeze", "type": "Sloop", "length": 28.0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<R: Record> {
    pub id: Id<R>,
    #[serde(flatten)]
    pub record: R,
}

impl<R: Record> Stored<R> {
    pub fn new(id: Id<R>, record: R) -> Self {
        Self { id, record }
    }
}

/// Boat entity - a named vessel, independent of any slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    pub name: String,
    #[serde(rename = "type")]
    pub boat_type: String,
    pub length: f64,
}

impl Record for Boat {
    const KIND: &'static str = "boat";
}

/// Slip entity - a docking location holding at most one boat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slip {
    pub number: i64,
    pub current_boat: Option<BoatId>,
}

impl Record for Slip {
    const KIND: &'static str = "slip";
}

impl Slip {
    /// Create an empty slip
    pub fn new(number: i64) -> Self {
        Self {
            number,
            current_boat: None,
        }
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy::from(self.current_boat)
    }

    /// Empty -> Occupied. Returns the updated slip; `self` is untouched.
    pub fn dock(&self, boat_id: BoatId) -> MarinaResult<Slip> {
        match self.occupancy() {
            Occupancy::Occupied(_) => Err(MarinaError::SlipOccupied),
            Occupancy::Empty => Ok(Slip {
                number: self.number,
                current_boat: Some(boat_id),
            }),
        }
    }

    /// Occupied -> Empty. Returns the updated slip; `self` is untouched.
    pub fn undock(&self) -> MarinaResult<Slip> {
        match self.occupancy() {
            Occupancy::Empty => Err(MarinaError::SlipNotOccupied),
            Occupancy::Occupied(_) => Ok(Slip {
                number: self.number,
                current_boat: None,
            }),
        }
    }
}
