// Application layer - Synthetic fleet generator and read services
pub mod attributes;
pub mod clock;
pub mod diagnostics;
pub mod fleet_cache;
pub mod fleet_service;
pub mod generator;
pub mod history;
pub mod overview;
pub mod query;
pub mod risk;
pub mod rng;
pub mod telemetry_series;
