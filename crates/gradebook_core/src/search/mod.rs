//! Student lookup and ordering.
//!
//! # Responsibility
//! - Offer two interchangeable lookups (linear scan, indexed) that return the
//!   same record and report their own elapsed time.
//! - Reorder the student sequence by a chosen key and keep the index valid.
//!
//! # Invariants
//! - Linear and indexed lookups agree on every identifier for every state.
//! - Sorting is stable in both directions.
//! - Index rebuild cost after a sort is not counted in the reported duration.

pub mod lookup;
pub mod sort;
