// Domain layer - Plain serializable fleet records
pub mod group;
pub mod risk_event;
pub mod robot;
pub mod telemetry;
pub mod timestamp;
