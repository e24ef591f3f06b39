//! Infrastructure Layer
//!
//! Document store implementations.

pub mod memory;
pub mod postgres;
