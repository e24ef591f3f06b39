//! Boat CRUD Use Case

use crate::domain::entities::{Boat, BoatId, Stored};
use crate::domain::repository::DocumentStore;
use crate::error::{MarinaError, MarinaResult};
use std::sync::Arc;

/// Create, read, replace and delete boats
pub struct ManageBoatsUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> ManageBoatsUseCase<S>
where
    S: DocumentStore + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn create(&self, boat: Boat) -> MarinaResult<BoatId> {
        let boat_id = self.store.insert(&boat).await?;

        tracing::info!(boat_id = %boat_id, name = %boat.name, "Boat created");

        Ok(boat_id)
    }

    pub async fn get(&self, boat_id: BoatId) -> MarinaResult<Stored<Boat>> {
        self.store
            .get(boat_id)
            .await?
            .ok_or(MarinaError::BoatNotFound)
    }

    pub async fn list(&self) -> MarinaResult<Vec<Stored<Boat>>> {
        self.store.list::<Boat>().await
    }

    /// Full replace. Every field of the stored boat is overwritten.
    pub async fn replace(&self, boat_id: BoatId, boat: Boat) -> MarinaResult<BoatId> {
        if !self.store.update(boat_id, &boat).await? {
            return Err(MarinaError::BoatNotFound);
        }

        tracing::info!(boat_id = %boat_id, "Boat replaced");

        Ok(boat_id)
    }

    /// Delete without checking existence first; deleting an unknown boat
    /// succeeds. Slips still pointing at the boat are left as they are.
    pub async fn delete(&self, boat_id: BoatId) -> MarinaResult<()> {
        let existed = self.store.delete(boat_id).await?;

        tracing::info!(boat_id = %boat_id, existed, "Boat deleted");

        Ok(())
    }
}
