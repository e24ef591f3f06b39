//! Domain Value Objects

use crate::domain::entities::BoatId;

/// Whether a slip currently holds a boat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Occupied(BoatId),
}

impl Occupancy {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Occupancy::Occupied(_))
    }
}

impl From<Option<BoatId>> for Occupancy {
    fn from(current_boat: Option<BoatId>) -> Self {
        match current_boat {
            Some(boat_id) => Occupancy::Occupied(boat_id),
            None => Occupancy::Empty,
        }
    }
}
