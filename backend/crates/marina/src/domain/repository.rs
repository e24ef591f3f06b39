//! Store Traits
//!
//! Interface to the document store. Implementations are in the infra layer.

use crate::domain::entities::{Record, Stored};
use crate::error::MarinaResult;
use kernel::id::Id;

/// Document store trait
///
/// Every operation is scoped to the collection named by `R::KIND`.
/// Single-key operations are assumed strongly consistent; nothing here
/// spans more than one key.
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// Insert a new record and return the id the store generated for it
    async fn insert<R: Record>(&self, record: &R) -> MarinaResult<Id<R>>;

    /// Get a record by id
    async fn get<R: Record>(&self, id: Id<R>) -> MarinaResult<Option<Stored<R>>>;

    /// All records of the kind, ascending by id
    async fn list<R: Record>(&self) -> MarinaResult<Vec<Stored<R>>>;

    /// Overwrite an existing record. Returns false if the id is unknown.
    async fn update<R: Record>(&self, id: Id<R>, record: &R) -> MarinaResult<bool>;

    /// Delete a record. Returns false if the id is unknown.
    async fn delete<R: Record>(&self, id: Id<R>) -> MarinaResult<bool>;
}
