// Telemetry series - Synthetic sensor readings walking back from now

use chrono::{DateTime, Duration, Utc};

use super::rng::{clamp, fingerprint, SeededRng};
use crate::domain::telemetry::TelemetrySample;

const SERIES_SALT: u32 = 0xA5A5_A5A5;

pub fn series_seed(robot_id: &str) -> u32 {
    fingerprint(robot_id) ^ SERIES_SALT
}

/// `points` samples spaced `interval_seconds` apart, oldest first, the last
/// one stamped `now`. Timestamps past chrono's range saturate at `MIN_UTC`.
pub fn telemetry_series(
    robot_id: &str,
    points: usize,
    interval_seconds: u32,
    now: DateTime<Utc>,
) -> Vec<TelemetrySample> {
    let mut rng = SeededRng::new(series_seed(robot_id));
    let base_battery = rng.scaled(40.0, 50.0);
    let base_health = rng.scaled(70.0, 25.0);
    let base_motor_temp = rng.scaled(55.0, 15.0);
    let base_latency = rng.scaled(40.0, 80.0);

    let noise = |rng: &mut SeededRng| (rng.next_f64() - 0.5) * 6.0;

    (0..points)
        .map(|i| {
            let steps_back = (points - 1 - i) as i64;
            let timestamp = steps_back
                .checked_mul(i64::from(interval_seconds))
                .and_then(Duration::try_seconds)
                .and_then(|back| now.checked_sub_signed(back))
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            let t = i as f64;

            let battery = base_battery - t * rng.scaled(0.05, 0.04) + noise(&mut rng);
            let health = base_health - t * rng.scaled(0.015, 0.02) + noise(&mut rng) * 0.7;
            let motor_temp = base_motor_temp + (t / 6.0).sin() * 3.0 + noise(&mut rng);
            let latency = base_latency + (t / 4.0).sin() * 12.0 + noise(&mut rng) * 5.0;

            TelemetrySample::new(
                timestamp,
                clamp(battery, 0.0, 100.0),
                clamp(health, 0.0, 100.0),
                clamp(motor_temp, 35.0, 98.0),
                clamp(latency, 10.0, 500.0),
            )
        })
        .collect()
}
