// Library root - Deterministic synthetic robot-fleet telemetry

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::fleet_service::FleetService;
pub use error::{FleetError, Result};
