//! Marina Router

use crate::domain::repository::DocumentStore;
use crate::infra::memory::MemoryDocumentStore;
use crate::infra::postgres::PgDocumentStore;
use crate::presentation::handlers::{self, MarinaAppState};
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

/// Create the marina router with the PostgreSQL store
pub fn marina_router(store: PgDocumentStore) -> Router {
    marina_router_generic(store)
}

/// Create the marina router backed by process memory
pub fn marina_router_in_memory(store: MemoryDocumentStore) -> Router {
    marina_router_generic(store)
}

/// Create a marina router for any store implementation
///
/// Arrival and departure share a path and are told apart by method:
/// `PUT` docks the boat, `DELETE` undocks it.
pub fn marina_router_generic<S>(store: S) -> Router
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let state = MarinaAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route(
            "/boats",
            get(handlers::list_boats::<S>).post(handlers::create_boat::<S>),
        )
        .route(
            "/boats/{boat_id}",
            get(handlers::get_boat::<S>)
                .patch(handlers::replace_boat::<S>)
                .delete(handlers::delete_boat::<S>),
        )
        .route(
            "/slips",
            get(handlers::list_slips::<S>).post(handlers::create_slip::<S>),
        )
        .route(
            "/slips/{slip_id}",
            get(handlers::get_slip::<S>).delete(handlers::delete_slip::<S>),
        )
        .route(
            "/slips/{slip_id}/{boat_id}",
            put(handlers::boat_arrives::<S>).delete(handlers::boat_departs::<S>),
        )
        .with_state(state)
}
