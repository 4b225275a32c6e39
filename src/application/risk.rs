// Risk scoring - Composite score, cause and narrative

use super::attributes::PhysicalAttributes;
use super::rng::{clamp, fingerprint, round_half_up, SeededRng};
use crate::domain::robot::RobotStatus;

pub const HOT_MOTOR_TEMP: u8 = 88;
pub const HIGH_LATENCY: u16 = 280;
pub const LOW_BATTERY: u8 = 12;
pub const LOW_BATTERY_HINT: u8 = 15;
pub const LOW_HEALTH: u8 = 70;

const REASON_SALT: u32 = 0x9E37_79B9;

pub const REASON_OFFLINE: &str = "prolonged offline";
pub const REASON_LOW_BATTERY: &str = "low battery";
pub const REASON_LOW_HEALTH: &str = "low health";
pub const REASON_LATENCY: &str = "network latency anomaly";
pub const REASON_OVERHEATING: &str = "motor overheating";
pub const FALLBACK_REASONS: [&str; 4] = [
    "motion control fault",
    "localization drift",
    "frequent e-stop triggers",
    "sensor data fluctuation",
];

impl PhysicalAttributes {
    pub fn is_hot(&self) -> bool {
        self.motor_temp >= HOT_MOTOR_TEMP
    }

    pub fn is_lagging(&self) -> bool {
        self.network_latency >= HIGH_LATENCY
    }
}

/// Consumes one draw for the jitter term.
pub fn risk_score(attrs: &PhysicalAttributes, rng: &mut SeededRng) -> u8 {
    let offline = if attrs.status == RobotStatus::Offline { 20.0 } else { 0.0 };
    let hot = if attrs.is_hot() { 8.0 } else { 0.0 };
    let lagging = if attrs.is_lagging() { 8.0 } else { 0.0 };
    let raw = 30.0
        + (100.0 - f64::from(attrs.health)) * 0.55
        + (30.0 - f64::from(attrs.battery)) * 0.7
        + offline
        + hot
        + lagging
        + rng.next_f64() * 12.0;
    clamp(round_half_up(raw), 0.0, 100.0) as u8
}

/// First matching rule wins; otherwise a fallback keyed by the robot id.
pub fn risk_reason(attrs: &PhysicalAttributes, robot_id: &str) -> &'static str {
    if attrs.status == RobotStatus::Offline {
        REASON_OFFLINE
    } else if attrs.battery <= LOW_BATTERY {
        REASON_LOW_BATTERY
    } else if attrs.health <= LOW_HEALTH {
        REASON_LOW_HEALTH
    } else if attrs.is_lagging() {
        REASON_LATENCY
    } else if attrs.is_hot() {
        REASON_OVERHEATING
    } else {
        SeededRng::new(fingerprint(robot_id) ^ REASON_SALT).pick(&FALLBACK_REASONS)
    }
}

pub fn urgency(score: u8) -> &'static str {
    match score {
        90.. => "priority attention",
        80.. => "monitor closely",
        _ => "observe",
    }
}

pub fn remark(reason: &str, attrs: &PhysicalAttributes, score: u8) -> String {
    let mut hints = Vec::new();
    if attrs.is_hot() {
        hints.push("thermal hint");
    }
    if attrs.is_lagging() {
        hints.push("latency hint");
    }
    if attrs.battery <= LOW_BATTERY_HINT {
        hints.push("low-battery hint");
    }

    if hints.is_empty() {
        format!("{reason}; {}", urgency(score))
    } else {
        format!("{reason}; {}, {}", hints.join(", "), urgency(score))
    }
}
