//! Slip CRUD Use Case

use crate::domain::entities::{Slip, SlipId, Stored};
use crate::domain::repository::DocumentStore;
use crate::error::{MarinaError, MarinaResult};
use std::sync::Arc;

/// Create, read and delete slips
pub struct ManageSlipsUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
}

impl<S> ManageSlipsUseCase<S>
where
    S: DocumentStore + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// New slips always start empty
    pub async fn create(&self, number: i64) -> MarinaResult<SlipId> {
        let slip_id = self.store.insert(&Slip::new(number)).await?;

        tracing::info!(slip_id = %slip_id, number, "Slip created");

        Ok(slip_id)
    }

    pub async fn get(&self, slip_id: SlipId) -> MarinaResult<Stored<Slip>> {
        self.store
            .get(slip_id)
            .await?
            .ok_or(MarinaError::SlipNotFound)
    }

    pub async fn list(&self) -> MarinaResult<Vec<Stored<Slip>>> {
        self.store.list::<Slip>().await
    }

    pub async fn delete(&self, slip_id: SlipId) -> MarinaResult<()> {
        let slip = self.get(slip_id).await?;

        if !self.store.delete(slip_id).await? {
            // Removed by someone else between the read and the delete
            return Err(MarinaError::SlipNotFound);
        }

        tracing::info!(
            slip_id = %slip_id,
            current_boat = ?slip.record.current_boat,
            "Slip deleted"
        );

        Ok(())
    }
}
