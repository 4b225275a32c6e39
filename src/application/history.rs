// History and events - Past risk snapshots and the fleet-wide event log

use chrono::{DateTime, Duration, Utc};

use super::rng::{clamp, round_half_up, SeededRng};
use crate::domain::risk_event::{EventStatus, RiskEvent, Severity};
use crate::domain::robot::{RiskLevel, RiskSnapshot, RobotRecord};

const HISTORY_PROBABILITY: f64 = 0.22;
const EVENT_WINDOW_HOURS: f64 = 72.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
pub const EVENT_LOG_KEY: &str = "risk-events";

pub const EVENT_REASONS: [&str; 6] = [
    "low battery",
    "low health",
    "network latency anomaly",
    "motor overheating",
    "motion control fault",
    "localization drift",
];

/// Draws the history gate, then up to three snapshots from the robot's stream.
pub fn risk_history(
    rng: &mut SeededRng,
    seed: u32,
    current_score: u8,
    now: DateTime<Utc>,
) -> Vec<RiskSnapshot> {
    if rng.next_f64() >= HISTORY_PROBABILITY {
        return Vec::new();
    }

    let count = 1 + rng.index(3);
    (0..count)
        .map(|h| {
            let hours_ago = 8 + round_half_up(rng.next_f64() * 120.0) as i64;
            let raw = f64::from(current_score) - 10.0 + rng.next_f64() * 25.0;
            let score = clamp(round_half_up(raw), 40.0, 100.0) as u8;
            RiskSnapshot {
                id: format!("{seed}-{h}"),
                time: now - Duration::hours(hours_ago),
                score,
                level: RiskLevel::from_score(score),
            }
        })
        .collect()
}

/// Synthesizes `count` events over `robots`, newest first. An empty fleet
/// yields no events.
pub fn risk_events(robots: &[&RobotRecord], count: usize, now: DateTime<Utc>) -> Vec<RiskEvent> {
    if robots.is_empty() {
        return Vec::new();
    }

    let mut rng = SeededRng::from_key(EVENT_LOG_KEY);
    let mut events: Vec<RiskEvent> = (0..count)
        .map(|i| {
            let robot = robots[rng.index(robots.len())];
            let hours_ago = (rng.next_f64() * EVENT_WINDOW_HOURS).floor() as i64;
            let jitter_ms = round_half_up(rng.next_f64() * MILLIS_PER_HOUR) as i64;
            let triggered_at = now - Duration::hours(hours_ago) - Duration::milliseconds(jitter_ms);
            let severity = rng.pick(&Severity::ALL);
            let status = rng.pick(&EventStatus::ALL);
            let reason = rng.pick(&EVENT_REASONS);
            let boost = if severity == Severity::Critical { 15.0 } else { 0.0 };
            let score = clamp(round_half_up(rng.scaled(55.0, 45.0) + boost), 0.0, 100.0) as u8;

            RiskEvent {
                id: (i + 1).to_string(),
                robot_id: robot.id.clone(),
                robot_name: robot.name.clone(),
                group: robot.group.clone(),
                message: format!("Risk event: {reason}"),
                reason,
                severity,
                risk_score: score,
                current_value: score,
                status,
                triggered_at,
            }
        })
        .collect();

    events.sort_by(|a, b| b.triggered_at.cmp(&a.triggered_at));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generator::create_robot;
    use crate::domain::group::Group;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_history_snapshots_precede_now() {
        let mut with_history = 0;
        for seed in 0..2000u32 {
            let mut rng = SeededRng::new(seed);
            let history = risk_history(&mut rng, seed, 70, now());
            assert!(history.len() <= 3);
            if !history.is_empty() {
                with_history += 1;
            }
            for snapshot in &history {
                assert!(snapshot.time < now());
                assert!(now() - snapshot.time >= Duration::hours(8));
                assert!((40..=100).contains(&snapshot.score));
                assert_eq!(snapshot.level, RiskLevel::from_score(snapshot.score));
            }
        }
        // Roughly 22% of units carry history.
        assert!((300..600).contains(&with_history), "{with_history}");
    }

    #[test]
    fn test_events_sorted_newest_first() {
        let group = Group::new("engine", "engine", 88);
        let robots: Vec<RobotRecord> = (0..group.total_count).map(|i| create_robot(&group, i, now())).collect();
        let refs: Vec<&RobotRecord> = robots.iter().collect();

        let events = risk_events(&refs, 50, now());
        assert_eq!(events.len(), 50);
        assert!(events.windows(2).all(|w| w[0].triggered_at >= w[1].triggered_at));
        for event in &events {
            assert!(event.triggered_at <= now());
            assert!(now() - event.triggered_at <= Duration::hours(73));
            assert!(EVENT_REASONS.contains(&event.reason));
            assert_eq!(event.message, format!("Risk event: {}", event.reason));
            assert_eq!(event.group, "engine");
            assert_eq!(event.risk_score, event.current_value);
            assert!(event.risk_score >= 55);
        }
    }

    #[test]
    fn test_empty_fleet_has_no_events() {
        assert!(risk_events(&[], 10, now()).is_empty());
    }
}
