//! Event carbon-footprint calculator.
//!
//! Resolves an event's population into origin buckets, scores nine
//! emission categories independently, and aggregates the result into a
//! classified report.

#[cfg(feature = "api")]
pub mod api;
pub mod calc;
pub mod engine;
pub mod event;
pub mod factors;
pub mod io;
pub mod logging;
pub mod population;
pub mod report;
pub mod scenario;
pub mod store;
