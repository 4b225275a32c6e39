// Robot record assembly - one seeded stream per (group, index)
use chrono::{DateTime, Utc};

use super::attributes::{derive_attributes, derive_catalog_entry};
use super::diagnostics::run_checks;
use super::history::risk_history;
use super::risk::{remark, risk_reason, risk_score};
use super::rng::{fingerprint, SeededRng};
use crate::domain::group::Group;
use crate::domain::robot::{RiskLetter, RiskLevel, RobotRecord};

pub fn entity_key(group_key: &str, index: usize) -> String {
    format!("{group_key}::{index}")
}

pub fn create_robot(group: &Group, index: usize, now: DateTime<Utc>) -> RobotRecord {
    let seed = fingerprint(&entity_key(&group.key, index));
    let mut rng = SeededRng::new(seed);

    let attrs = derive_attributes(&mut rng, now);
    let risk_score = risk_score(&attrs, &mut rng);
    let risk_history = risk_history(&mut rng, seed, risk_score, now);

    let id = group.robot_id(index);
    let risk_reason = risk_reason(&attrs, &id);
    let catalog = derive_catalog_entry(&mut rng, now);
    let risk_letter = RiskLetter::from_score(risk_score);
    let checks = run_checks(&mut rng, &attrs, risk_score);

    RobotRecord {
        name: format!("{} #{:04}", attrs.model, index + 1),
        id,
        group: group.key.clone(),
        model: attrs.model,
        status: attrs.status,
        battery: attrs.battery,
        health: attrs.health,
        motor_temp: attrs.motor_temp,
        network_latency: attrs.network_latency,
        work_mode: attrs.work_mode,
        zone: attrs.zone,
        last_seen: attrs.last_seen,
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        risk_letter,
        is_high_risk: risk_letter == RiskLetter::H,
        risk_reason,
        remark: remark(risk_reason, &attrs, risk_score),
        part_no: catalog.part_no,
        reference_no: catalog.reference_no,
        type_spec: catalog.type_spec,
        tech: catalog.tech,
        checks,
        risk_history,
    }
}

/// Full ordered population of a group, index `0..total_count`.
pub fn generate_group(group: &Group, now: DateTime<Utc>) -> Vec<RobotRecord> {
    (0..group.total_count)
        .map(|index| create_robot(group, index, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::robot::RobotStatus;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn hop() -> Group {
        Group::new("hop", "hop", 655)
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_group(&hop(), now()), generate_group(&hop(), now()));
    }

    #[test]
    fn test_first_hop_robot() {
        let robot = create_robot(&hop(), 0, now());
        assert_eq!(robot.id, "HOP-0001");
        assert_eq!(robot.name, "R-Nova #0001");
        assert_eq!(robot.group, "hop");
        assert_eq!(robot.status, RobotStatus::Online);
        assert_eq!(robot.battery, 92);
        assert_eq!(robot.health, 63);
        assert_eq!(robot.motor_temp, 92);
        assert_eq!(robot.network_latency, 321);
        assert_eq!(robot.risk_score, 27);
        assert_eq!(robot.risk_level, RiskLevel::Low);
        assert_eq!(robot.risk_letter, RiskLetter::L);
        assert_eq!(robot.risk_reason, "low health");
        assert_eq!(robot.remark, "low health; thermal hint, latency hint, observe");
        assert_eq!(robot.part_no, "UD18_044RE_084");

        let hours: Vec<_> = robot.risk_history.iter().map(|s| (now() - s.time).num_hours()).collect();
        assert_eq!(hours, vec![27, 112]);
        assert!(robot.risk_history.iter().all(|s| s.score == 40));

        let checks: String = robot.checks.values().map(|c| if c.ok { '1' } else { '0' }).collect();
        assert_eq!(checks, "1011111");
    }

    #[test]
    fn test_hop_population_golden() {
        let robots = generate_group(&hop(), now());
        let count = |status| robots.iter().filter(|r| r.status == status).count();
        assert_eq!(robots.len(), 655);
        assert_eq!(count(RobotStatus::Online), 527);
        assert_eq!(count(RobotStatus::Maintenance), 74);
        assert_eq!(count(RobotStatus::Offline), 54);
        assert_eq!(robots.iter().filter(|r| r.is_high_risk).count(), 16);
        assert_eq!(robots.iter().filter(|r| !r.risk_history.is_empty()).count(), 148);
    }

    #[test]
    fn test_record_invariants() {
        let group = Group::new("254/214", "254/214", 965);
        let robots = generate_group(&group, now());
        let ids: HashSet<_> = robots.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), robots.len());

        for robot in &robots {
            assert!(robot.battery <= 100);
            assert!(robot.health <= 100);
            assert!((35..=98).contains(&robot.motor_temp));
            assert!((10..=500).contains(&robot.network_latency));
            assert!(robot.risk_score <= 100);
            assert!(robot.last_seen <= now());
            assert_eq!(robot.risk_level, RiskLevel::from_score(robot.risk_score));
            assert_eq!(robot.is_high_risk, robot.risk_letter == RiskLetter::H);
            assert!(robot.remark.starts_with(robot.risk_reason));
            assert_eq!(robot.checks.len(), 7);
            if robot.is_high_risk {
                assert!(robot.failing_checks().next().is_some(), "{}", robot.id);
            }
            assert!(robot.risk_history.iter().all(|s| s.time < now()));
        }
    }
}
