// Telemetry data domain models
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::timestamp;

/// One synthetic sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySample {
    #[serde(serialize_with = "timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    pub battery: f64,
    pub health: f64,
    pub motor_temp: f64,
    pub network_latency: f64,
}

impl TelemetrySample {
    pub fn new(
        timestamp: DateTime<Utc>,
        battery: f64,
        health: f64,
        motor_temp: f64,
        network_latency: f64,
    ) -> Self {
        Self {
            timestamp,
            battery,
            health,
            motor_temp,
            network_latency,
        }
    }
}
