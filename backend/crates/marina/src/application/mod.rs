//! Application Layer - Use Cases
//!
//! This layer orchestrates domain rules and the document store.
//! Contains use case implementations.

pub mod config;
pub mod dock_boat;
pub mod manage_boats;
pub mod manage_slips;
pub mod undock_boat;
