//! Boat Arrival Use Case

use crate::domain::entities::{Boat, BoatId, Slip, SlipId};
use crate::domain::repository::DocumentStore;
use crate::domain::value_objects::Occupancy;
use crate::error::{MarinaError, MarinaResult};
use std::sync::Arc;

/// Put a boat into an empty slip.
///
/// Checks run in a fixed order: slip exists, slip is empty, boat exists.
/// The read-modify-write on the slip is not atomic; two concurrent
/// arrivals on the same empty slip can both succeed.
pub struct DockBoatUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> DockBoatUseCase<S>
where
    S: DocumentStore + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// `boat_id` is `None` when the caller's boat reference cannot name any
    /// boat; it is reported as a missing boat once the slip checks pass.
    pub async fn execute(&self, slip_id: SlipId, boat_id: Option<BoatId>) -> MarinaResult<()> {
        let slip = self
            .store
            .get::<Slip>(slip_id)
            .await?
            .ok_or(MarinaError::SlipNotFound)?;

        if let Occupancy::Occupied(current) = slip.record.occupancy() {
            tracing::debug!(slip_id = %slip_id, current_boat = %current, "Slip already holds a boat");
            return Err(MarinaError::SlipOccupied);
        }

        let boat_id = boat_id.ok_or(MarinaError::BoatNotFound)?;
        if self.store.get::<Boat>(boat_id).await?.is_none() {
            return Err(MarinaError::BoatNotFound);
        }

        let docked = slip.record.dock(boat_id)?;
        if !self.store.update(slip_id, &docked).await? {
            return Err(MarinaError::SlipNotFound);
        }

        tracing::info!(slip_id = %slip_id, boat_id = %boat_id, "Boat arrived");

        Ok(())
    }
}
