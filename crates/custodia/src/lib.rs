//! Custodia: compatibility scoring and ranking for custodian dispatch.
//!
//! The crate is a library-style computation invoked synchronously by the
//! surrounding API service: given one pending service request and a pool of
//! candidate custodians, it produces a ranked, explainable 0-100
//! compatibility score per candidate. Persistence, notification delivery,
//! and presentation belong to the callers.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod telemetry;
