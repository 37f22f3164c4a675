//! Core domain layer for the delivery-insights pipeline.
//!
//! Holds the raw and normalized record models, the error taxonomy, and the
//! pure numeric/calendar/geodesic primitives the aggregation layer is built
//! on. This crate has no I/O and no dependency on the rest of the workspace.

pub mod calendar;
pub mod error;
pub mod geo;
pub mod models;
pub mod stats;
