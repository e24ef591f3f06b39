//! Boat Departure Use Case

use crate::domain::entities::{Boat, BoatId, Slip, SlipId};
use crate::domain::repository::DocumentStore;
use crate::error::{MarinaError, MarinaResult};
use std::sync::Arc;

/// Empty an occupied slip.
///
/// Checks run in a fixed order: slip exists, slip is occupied, boat exists.
/// The departing boat is not compared with the one recorded on the slip.
pub struct UndockBoatUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> UndockBoatUseCase<S>
where
    S: DocumentStore + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, slip_id: SlipId, boat_id: Option<BoatId>) -> MarinaResult<()> {
        let slip = self
            .store
            .get::<Slip>(slip_id)
            .await?
            .ok_or(MarinaError::SlipNotFound)?;

        let undocked = slip.record.undock()?;

        let boat_id = boat_id.ok_or(MarinaError::BoatNotFound)?;
        if self.store.get::<Boat>(boat_id).await?.is_none() {
            return Err(MarinaError::BoatNotFound);
        }

        if !self.store.update(slip_id, &undocked).await? {
            return Err(MarinaError::SlipNotFound);
        }

        tracing::info!(
            slip_id = %slip_id,
            boat_id = %boat_id,
            recorded_boat = ?slip.record.current_boat,
            "Boat departed"
        );

        Ok(())
    }
}
