//! Observability
//!
//! Structured logging for kata operations, see [`telemetry`].

pub mod telemetry;
