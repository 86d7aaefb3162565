//! Rule-based credit scoring: a pure scoring engine plus the HTTP surface,
//! configuration, and telemetry wiring around it.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
