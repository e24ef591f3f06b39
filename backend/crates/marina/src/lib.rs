//! Marina Backend Module
//!
//! Boats, slips and the arrival/departure of a boat at a slip.
//!
//! Clean Architecture structure:
//! - `domain/` - Records, occupancy rules, store trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Document store implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - The store assigns ids; records are fetched and written one key at a time
//! - Arrival/departure are unguarded read-modify-write sequences
//! - Boat deletion does not check existence and does not touch slips

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{ConfigError, MarinaConfig};
pub use domain::entities::{Boat, BoatId, Record, Slip, SlipId, Stored};
pub use domain::repository::DocumentStore;
pub use error::{MarinaError, MarinaResult};
pub use infra::memory::MemoryDocumentStore;
pub use infra::postgres::PgDocumentStore;
pub use presentation::router::{marina_router, marina_router_generic, marina_router_in_memory};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
