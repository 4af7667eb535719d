//! Read-only statistics and report projections.
//!
//! # Responsibility
//! - Derive per-course aggregates from current registry state.
//! - Build course/professor/student views and render them as text tables.
//!
//! # Invariants
//! - Nothing in this module mutates the registry.
//! - Projections keep current sequence order.

pub mod projection;
pub mod render;
pub mod stats;
