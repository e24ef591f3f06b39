//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional at the serde level so that an absent
//! field is reported as "Missing parameters" rather than a parse error.

use crate::domain::entities::Boat;
use crate::error::MarinaError;
use serde::{Deserialize, Serialize};

/// Body for POST /boats and PATCH /boats/{boat_id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoatRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub boat_type: Option<String>,
    pub length: Option<f64>,
}

impl TryFrom<BoatRequest> for Boat {
    type Error = MarinaError;

    fn try_from(req: BoatRequest) -> Result<Self, Self::Error> {
        match (req.name, req.boat_type, req.length) {
            (Some(name), Some(boat_type), Some(length)) => Ok(Boat {
                name,
                boat_type,
                length,
            }),
            _ => Err(MarinaError::MissingParameters),
        }
    }
}

/// Body for POST /slips
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlipRequest {
    pub number: Option<i64>,
}

impl SlipRequest {
    pub fn number(&self) -> Result<i64, MarinaError> {
        self.number.ok_or(MarinaError::MissingParameters)
    }
}

/// Response for create and replace operations
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}
