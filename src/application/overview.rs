// Aggregate views folded over cached populations and event logs
use chrono::{DateTime, Duration, Timelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::group::{Group, GroupStats};
use crate::domain::risk_event::{EventStatus, RiskEvent, Severity};
use crate::domain::robot::{CheckCode, RiskLetter, RobotRecord, RobotStatus};
use crate::domain::timestamp;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOverview {
    pub key: String,
    pub name: String,
    pub expected_total: usize,
    #[serde(flatten)]
    pub stats: GroupStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total: usize,
    pub high_risk: usize,
    pub history_high_risk: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    #[serde(serialize_with = "timestamp::serialize")]
    pub time: DateTime<Utc>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    pub summary: FleetSummary,
    pub group_stats: Vec<GroupOverview>,
    pub level_distribution: BTreeMap<RiskLetter, usize>,
    pub check_failures: BTreeMap<CheckCode, usize>,
    #[serde(rename = "events24h")]
    pub events_24h: Vec<HourlyCount>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatistics {
    pub severity_stats: BTreeMap<Severity, usize>,
    pub status_stats: BTreeMap<EventStatus, usize>,
    pub recent: Vec<RiskEvent>,
}

pub fn group_stats<'a>(robots: impl IntoIterator<Item = &'a RobotRecord>) -> GroupStats {
    robots.into_iter().fold(GroupStats::default(), |mut stats, robot| {
        stats.total += 1;
        match robot.status {
            RobotStatus::Online => stats.online += 1,
            RobotStatus::Offline => stats.offline += 1,
            RobotStatus::Maintenance => stats.maintenance += 1,
        }
        if robot.is_high_risk {
            stats.high_risk += 1;
        }
        if !robot.risk_history.is_empty() {
            stats.history_high_risk += 1;
        }
        stats
    })
}

pub fn group_overview(group: &Group, robots: &[RobotRecord]) -> GroupOverview {
    GroupOverview {
        key: group.key.clone(),
        name: group.display_name.clone(),
        expected_total: group.total_count,
        stats: group_stats(robots),
    }
}

pub fn summarize(groups: &[GroupOverview]) -> FleetSummary {
    groups.iter().fold(FleetSummary::default(), |mut summary, group| {
        summary.total += group.stats.total;
        summary.high_risk += group.stats.high_risk;
        summary.history_high_risk += group.stats.history_high_risk;
        summary
    })
}

pub fn level_distribution<'a>(robots: impl IntoIterator<Item = &'a RobotRecord>) -> BTreeMap<RiskLetter, usize> {
    let mut distribution = BTreeMap::new();
    for robot in robots {
        *distribution.entry(robot.risk_letter).or_insert(0) += 1;
    }
    distribution
}

/// Failing robots per check code; every code is present.
pub fn check_failures<'a>(robots: impl IntoIterator<Item = &'a RobotRecord>) -> BTreeMap<CheckCode, usize> {
    let mut failures: BTreeMap<CheckCode, usize> = CheckCode::ALL.into_iter().map(|code| (code, 0)).collect();
    for robot in robots {
        for code in robot.failing_checks() {
            *failures.entry(code).or_insert(0) += 1;
        }
    }
    failures
}

/// Events in `(now - 24h, now]` counted per UTC hour, ascending.
pub fn hourly_counts(events: &[RiskEvent], now: DateTime<Utc>) -> Vec<HourlyCount> {
    let since = now - Duration::hours(24);
    let mut buckets: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
    for event in events.iter().filter(|e| e.triggered_at > since && e.triggered_at <= now) {
        *buckets.entry(truncate_to_hour(event.triggered_at)).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(time, count)| HourlyCount { time, count })
        .collect()
}

pub fn event_statistics(events: &[RiskEvent], recent_limit: usize) -> EventStatistics {
    let mut severity_stats = BTreeMap::new();
    let mut status_stats = BTreeMap::new();
    for event in events {
        *severity_stats.entry(event.severity).or_insert(0) += 1;
        *status_stats.entry(event.status).or_insert(0) += 1;
    }
    EventStatistics {
        severity_stats,
        status_stats,
        recent: events.iter().take(recent_limit).cloned().collect(),
    }
}

fn truncate_to_hour(time: DateTime<Utc>) -> DateTime<Utc> {
    time.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: &str, at: DateTime<Utc>, severity: Severity, status: EventStatus) -> RiskEvent {
        RiskEvent {
            id: id.to_string(),
            robot_id: "HOP-0001".to_string(),
            robot_name: "R-Atlas #0001".to_string(),
            group: "hop".to_string(),
            message: "Risk event: low battery".to_string(),
            reason: "low battery",
            severity,
            risk_score: 70,
            current_value: 70,
            status,
            triggered_at: at,
        }
    }

    #[test]
    fn test_hourly_counts() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap();
        let events = vec![
            event("1", now - Duration::minutes(5), Severity::High, EventStatus::Pending),
            event("2", now - Duration::minutes(20), Severity::Low, EventStatus::Pending),
            event("3", now - Duration::minutes(45), Severity::Low, EventStatus::Resolved),
            event("4", now - Duration::hours(30), Severity::Low, EventStatus::Resolved),
        ];
        let counts = hourly_counts(&events, now);
        assert_eq!(
            counts,
            vec![
                HourlyCount { time: Utc.with_ymd_and_hms(2026, 10, 18, 11, 0, 0).unwrap(), count: 1 },
                HourlyCount { time: Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_event_statistics() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let events = vec![
            event("1", now, Severity::Critical, EventStatus::Pending),
            event("2", now, Severity::Critical, EventStatus::Resolved),
            event("3", now, Severity::Low, EventStatus::Pending),
        ];
        let stats = event_statistics(&events, 2);
        assert_eq!(stats.severity_stats[&Severity::Critical], 2);
        assert_eq!(stats.severity_stats[&Severity::Low], 1);
        assert_eq!(stats.status_stats[&EventStatus::Pending], 2);
        assert_eq!(stats.recent.len(), 2);
        assert_eq!(stats.recent[0].id, "1");
    }
}
