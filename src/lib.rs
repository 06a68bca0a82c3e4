//! Private share middleware.
//!
//! Exposes the component health probe (`PrivateShareMiddleware::health`) and
//! an axum service that serves it at `/health` for orchestrators and load
//! balancers.

pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use error::*;
pub use health::{ComponentCheck, HealthError, HealthReport, HealthStatus, PrivateShareMiddleware};
