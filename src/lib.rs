//! Liveness endpoints for the retail platform's inventory and orders services.
//!
//! Both binaries share this library and differ only in the [`Service`] they
//! pass to [`run`].

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod service;
pub mod shutdown;
pub mod telemetry;

pub use app::{build_router, run, serve, AppState};
pub use service::Service;
