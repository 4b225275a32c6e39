// Fleet service - Read surface over the synthetic fleet
use std::sync::Arc;

use super::clock::Clock;
use super::fleet_cache::{FleetCache, Population};
use super::history::risk_events;
use super::overview::{self, EventStatistics, FleetOverview};
use super::query::{EventFilter, RobotQuery};
use super::telemetry_series::telemetry_series;
use crate::domain::group::{Group, GroupStats};
use crate::domain::risk_event::RiskEvent;
use crate::domain::robot::RobotRecord;
use crate::domain::telemetry::TelemetrySample;

pub struct FleetService {
    cache: FleetCache,
}

impl FleetService {
    pub fn new(groups: Vec<Group>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: FleetCache::new(groups, clock),
        }
    }

    pub fn cache(&self) -> &FleetCache {
        &self.cache
    }

    pub fn list_groups(&self) -> &[Group] {
        self.cache.groups()
    }

    /// Cached population of a group; empty for an unknown key.
    pub fn list_robots(&self, group_key: &str) -> Population {
        self.cache
            .robots(group_key)
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// All groups concatenated in declared order.
    pub fn list_all_robots(&self) -> Vec<RobotRecord> {
        self.cache
            .all()
            .iter()
            .flat_map(|population| population.iter().cloned())
            .collect()
    }

    pub fn group_stats(&self, group_key: &str) -> GroupStats {
        overview::group_stats(self.list_robots(group_key).iter())
    }

    /// `points` samples ending now; an interval of zero is treated as one second.
    pub fn telemetry_series(&self, robot_id: &str, points: usize, interval_seconds: u32) -> Vec<TelemetrySample> {
        telemetry_series(robot_id, points, interval_seconds.max(1), self.cache.clock().now())
    }

    /// `count` events over the whole fleet, newest first.
    pub fn risk_events(&self, count: usize) -> Vec<RiskEvent> {
        let populations = self.cache.all();
        let robots: Vec<&RobotRecord> = populations.iter().flat_map(|p| p.iter()).collect();
        tracing::debug!(count, fleet = robots.len(), "synthesizing risk events");
        risk_events(&robots, count, self.cache.clock().now())
    }

    pub fn search_robots(&self, query: &RobotQuery) -> Vec<RobotRecord> {
        let populations = match query.group.as_deref() {
            Some(key) => vec![self.list_robots(key)],
            None => self.cache.all(),
        };
        populations
            .iter()
            .flat_map(|p| p.iter())
            .filter(|robot| query.matches(robot))
            .cloned()
            .collect()
    }

    /// Generates `count` events, then keeps the ones `filter` accepts.
    pub fn risk_events_filtered(&self, count: usize, filter: &EventFilter) -> Vec<RiskEvent> {
        self.risk_events(count)
            .into_iter()
            .filter(|event| filter.matches(event))
            .collect()
    }

    pub fn event_statistics(&self, count: usize, filter: &EventFilter, recent_limit: usize) -> EventStatistics {
        overview::event_statistics(&self.risk_events_filtered(count, filter), recent_limit)
    }

    pub fn fleet_overview(&self, event_count: usize) -> FleetOverview {
        let populations = self.cache.all();
        let group_stats: Vec<_> = self
            .cache
            .groups()
            .iter()
            .zip(populations.iter())
            .map(|(group, robots)| overview::group_overview(group, robots))
            .collect();
        let robots = || populations.iter().flat_map(|p| p.iter());
        let now = self.cache.clock().now();

        FleetOverview {
            summary: overview::summarize(&group_stats),
            group_stats,
            level_distribution: overview::level_distribution(robots()),
            check_failures: overview::check_failures(robots()),
            events_24h: overview::hourly_counts(&self.risk_events(event_count), now),
            generated_at: now,
        }
    }
}
