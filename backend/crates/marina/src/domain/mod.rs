//! Domain Layer - Records and business rules
//!
//! This layer contains:
//! - Domain entities (Boat, Slip) and the `Record` kind tag
//! - Domain value objects (Occupancy)
//! - Store traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
