//! HTTP Handlers

use crate::application::dock_boat::DockBoatUseCase;
use crate::application::manage_boats::ManageBoatsUseCase;
use crate::application::manage_slips::ManageSlipsUseCase;
use crate::application::undock_boat::UndockBoatUseCase;
use crate::domain::entities::{Boat, BoatId, Slip, SlipId, Stored};
use crate::domain::repository::DocumentStore;
use crate::error::{MarinaError, MarinaResult};
use crate::presentation::dto::{BoatRequest, CreatedResponse, SlipRequest};
use crate::presentation::extract::Payload;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

/// Shared state for marina handlers
#[derive(Clone)]
pub struct MarinaAppState<S>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

/// Path ids that are not positive integers cannot name a record
fn parse_boat_id(raw: &str) -> Option<BoatId> {
    raw.parse().ok()
}

fn parse_slip_id(raw: &str) -> MarinaResult<SlipId> {
    raw.parse().map_err(|_| MarinaError::SlipNotFound)
}

fn created(id: i64) -> impl IntoResponse {
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

// ============================================================================
// Boats
// ============================================================================

/// POST /boats
pub async fn create_boat<S>(
    State(state): State<MarinaAppState<S>>,
    Payload(req): Payload<BoatRequest>,
) -> MarinaResult<impl IntoResponse>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let boat = Boat::try_from(req)?;
    let boat_id = ManageBoatsUseCase::new(state.store.clone())
        .create(boat)
        .await?;

    Ok(created(boat_id.get()))
}

/// GET /boats/{boat_id}
pub async fn get_boat<S>(
    State(state): State<MarinaAppState<S>>,
    Path(boat_id): Path<String>,
) -> MarinaResult<Json<Stored<Boat>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let boat_id = parse_boat_id(&boat_id).ok_or(MarinaError::BoatNotFound)?;
    let boat = ManageBoatsUseCase::new(state.store.clone())
        .get(boat_id)
        .await?;

    Ok(Json(boat))
}

/// GET /boats
pub async fn list_boats<S>(
    State(state): State<MarinaAppState<S>>,
) -> MarinaResult<Json<Vec<Stored<Boat>>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let boats = ManageBoatsUseCase::new(state.store.clone()).list().await?;

    Ok(Json(boats))
}

/// PATCH /boats/{boat_id}
///
/// Full replace: all of name, type and length are required.
pub async fn replace_boat<S>(
    State(state): State<MarinaAppState<S>>,
    Path(boat_id): Path<String>,
    Payload(req): Payload<BoatRequest>,
) -> MarinaResult<impl IntoResponse>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let boat = Boat::try_from(req)?;
    let boat_id = parse_boat_id(&boat_id).ok_or(MarinaError::BoatNotFound)?;
    let boat_id = ManageBoatsUseCase::new(state.store.clone())
        .replace(boat_id, boat)
        .await?;

    Ok(created(boat_id.get()))
}

/// DELETE /boats/{boat_id}
///
/// Always 204, whether or not the boat existed.
pub async fn delete_boat<S>(
    State(state): State<MarinaAppState<S>>,
    Path(boat_id): Path<String>,
) -> MarinaResult<StatusCode>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    if let Some(boat_id) = parse_boat_id(&boat_id) {
        ManageBoatsUseCase::new(state.store.clone())
            .delete(boat_id)
            .await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Slips
// ============================================================================

/// POST /slips
pub async fn create_slip<S>(
    State(state): State<MarinaAppState<S>>,
    Payload(req): Payload<SlipRequest>,
) -> MarinaResult<impl IntoResponse>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let number = req.number()?;
    let slip_id = ManageSlipsUseCase::new(state.store.clone())
        .create(number)
        .await?;

    Ok(created(slip_id.get()))
}

/// GET /slips/{slip_id}
pub async fn get_slip<S>(
    State(state): State<MarinaAppState<S>>,
    Path(slip_id): Path<String>,
) -> MarinaResult<Json<Stored<Slip>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let slip = ManageSlipsUseCase::new(state.store.clone())
        .get(parse_slip_id(&slip_id)?)
        .await?;

    Ok(Json(slip))
}

/// GET /slips
pub async fn list_slips<S>(
    State(state): State<MarinaAppState<S>>,
) -> MarinaResult<Json<Vec<Stored<Slip>>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let slips = ManageSlipsUseCase::new(state.store.clone()).list().await?;

    Ok(Json(slips))
}

/// DELETE /slips/{slip_id}
pub async fn delete_slip<S>(
    State(state): State<MarinaAppState<S>>,
    Path(slip_id): Path<String>,
) -> MarinaResult<StatusCode>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    ManageSlipsUseCase::new(state.store.clone())
        .delete(parse_slip_id(&slip_id)?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /slips/{slip_id}/{boat_id}
pub async fn boat_arrives<S>(
    State(state): State<MarinaAppState<S>>,
    Path((slip_id, boat_id)): Path<(String, String)>,
) -> MarinaResult<StatusCode>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    DockBoatUseCase::new(state.store.clone())
        .execute(parse_slip_id(&slip_id)?, parse_boat_id(&boat_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /slips/{slip_id}/{boat_id}
pub async fn boat_departs<S>(
    State(state): State<MarinaAppState<S>>,
    Path((slip_id, boat_id)): Path<(String, String)>,
) -> MarinaResult<StatusCode>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    UndockBoatUseCase::new(state.store.clone())
        .execute(parse_slip_id(&slip_id)?, parse_boat_id(&boat_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
