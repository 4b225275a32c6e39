// HTTP request handlers
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::overview::{group_overview, EventStatistics, FleetOverview, GroupOverview};
use crate::application::query::{EventFilter, RobotQuery, RobotTab};
use crate::domain::risk_event::{EventStatus, RiskEvent, Severity};
use crate::domain::robot::{CheckCode, RiskLetter, RiskLevel, RobotRecord, RobotStatus};
use crate::domain::telemetry::TelemetrySample;
use crate::error::FleetError;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotParams {
    pub group: Option<String>,
    pub tab: Option<RobotTab>,
    pub keyword: Option<String>,
    pub status: Option<RobotStatus>,
    pub risk_level: Option<RiskLevel>,
    pub level: Option<RiskLetter>,
    /// Comma-separated check codes, e.g. `A2,A3`.
    pub axis_keys: Option<String>,
    pub axis_ok: Option<String>,
}

impl RobotParams {
    fn into_query(self) -> RobotQuery {
        let checks = self
            .axis_keys
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(CheckCode::parse)
            .collect();
        let checks_ok = self
            .axis_ok
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"));

        RobotQuery {
            group: self.group.filter(|g| !g.is_empty()),
            tab: self.tab.unwrap_or_default(),
            keyword: self.keyword,
            status: self.status,
            risk_level: self.risk_level,
            letter: self.level,
            checks,
            checks_ok,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TelemetryParams {
    pub points: Option<usize>,
    pub interval: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventParams {
    pub count: Option<usize>,
    pub group: Option<String>,
    pub status: Option<EventStatus>,
    pub severity: Option<Severity>,
}

impl EventParams {
    fn filter(&self) -> EventFilter {
        EventFilter {
            group: self.group.clone().filter(|g| !g.is_empty()),
            status: self.status,
            severity: self.severity,
        }
    }

    fn count(&self, state: &AppState) -> Result<usize, FleetError> {
        let count = self.count.unwrap_or(state.generator.default_event_count);
        if count > state.generator.max_events {
            return Err(FleetError::invalid(
                "count",
                format!("must be at most {}", state.generator.max_events),
            ));
        }
        Ok(count)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Groups with their population counters
pub async fn list_groups(State(state): State<Arc<AppState>>) -> Json<Vec<GroupOverview>> {
    let service = &state.fleet_service;
    let groups: Vec<GroupOverview> = service
        .list_groups()
        .iter()
        .map(|group| group_overview(group, &service.list_robots(&group.key)))
        .collect();
    Json(groups)
}

pub async fn list_robots(
    Query(params): Query<RobotParams>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<RobotRecord>> {
    Json(state.fleet_service.search_robots(&params.into_query()))
}

pub async fn fleet_dashboard(State(state): State<Arc<AppState>>) -> Json<FleetOverview> {
    Json(
        state
            .fleet_service
            .fleet_overview(state.generator.default_event_count),
    )
}

pub async fn robot_telemetry(
    Path(id): Path<String>,
    Query(params): Query<TelemetryParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TelemetrySample>>, ApiError> {
    let points = params.points.unwrap_or(state.generator.default_points);
    if points > state.generator.max_points {
        return Err(FleetError::invalid(
            "points",
            format!("must be at most {}", state.generator.max_points),
        )
        .into());
    }
    let interval = params
        .interval
        .unwrap_or(state.generator.default_interval_seconds);
    if interval == 0 {
        return Err(FleetError::invalid("interval", "must be at least 1 second").into());
    }
    let span = points.saturating_sub(1) as u64 * u64::from(interval);
    if span > state.generator.max_span_seconds {
        return Err(FleetError::invalid(
            "interval",
            format!(
                "window of {span}s exceeds {}s",
                state.generator.max_span_seconds
            ),
        )
        .into());
    }

    Ok(Json(state.fleet_service.telemetry_series(&id, points, interval)))
}

pub async fn list_risk_events(
    Query(params): Query<EventParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RiskEvent>>, ApiError> {
    let count = params.count(&state)?;
    Ok(Json(
        state
            .fleet_service
            .risk_events_filtered(count, &params.filter()),
    ))
}

pub async fn risk_event_statistics(
    Query(params): Query<EventParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventStatistics>, ApiError> {
    let count = params.count(&state)?;
    Ok(Json(state.fleet_service.event_statistics(
        count,
        &params.filter(),
        state.generator.recent_event_limit,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::FixedClock;
    use crate::application::fleet_service::FleetService;
    use crate::infrastructure::config::{FleetConfig, GeneratorSettings};
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};

    fn state() -> Arc<AppState> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap());
        Arc::new(AppState {
            fleet_service: FleetService::new(FleetConfig::default().groups(), Arc::new(clock)),
            generator: GeneratorSettings::default(),
        })
    }

    #[tokio::test]
    async fn test_list_groups() {
        let Json(groups) = list_groups(State(state())).await;
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].key, "hop");
        assert_eq!(groups[0].stats.total, 655);
    }

    #[tokio::test]
    async fn test_list_robots_with_axis_filter() {
        let params = RobotParams {
            group: Some("engine".to_string()),
            axis_keys: Some("A6, bogus".to_string()),
            axis_ok: Some("false".to_string()),
            ..Default::default()
        };
        let Json(robots) = list_robots(Query(params), State(state())).await;
        assert!(robots.iter().all(|r| r.group == "engine" && !r.checks[&CheckCode::A6].ok));
    }

    #[tokio::test]
    async fn test_telemetry_defaults() {
        let Json(series) = robot_telemetry(
            Path("HOP-0001".to_string()),
            Query(TelemetryParams::default()),
            State(state()),
        )
        .await
        .unwrap();
        assert_eq!(series.len(), 60);
    }

    #[tokio::test]
    async fn test_telemetry_rejects_zero_interval() {
        let params = TelemetryParams {
            points: Some(5),
            interval: Some(0),
        };
        let err = robot_telemetry(Path("HOP-0001".to_string()), Query(params), State(state()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_telemetry_rejects_window_past_limit() {
        let params = TelemetryParams {
            points: Some(5000),
            interval: Some(u32::MAX),
        };
        let err = robot_telemetry(Path("HOP-0001".to_string()), Query(params), State(state()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let params = TelemetryParams {
            points: Some(721),
            interval: Some(3600),
        };
        let Json(series) = robot_telemetry(Path("HOP-0001".to_string()), Query(params), State(state()))
            .await
            .unwrap();
        assert_eq!(series.len(), 721);
    }

    #[tokio::test]
    async fn test_events_count_limit() {
        let params = EventParams {
            count: Some(1_000_000),
            ..Default::default()
        };
        let err = list_risk_events(Query(params), State(state())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let Json(events) = list_risk_events(Query(EventParams::default()), State(state()))
            .await
            .unwrap();
        assert_eq!(events.len(), 120);
    }

    #[tokio::test]
    async fn test_event_statistics() {
        let Json(stats) = risk_event_statistics(Query(EventParams::default()), State(state()))
            .await
            .unwrap();
        assert_eq!(stats.severity_stats.values().sum::<usize>(), 120);
        assert_eq!(stats.recent.len(), 5);
    }

    #[test]
    fn test_robot_json_shape() {
        let state = state();
        let robots = state.fleet_service.list_robots("hop");
        let json = serde_json::to_value(&robots[0]).unwrap();
        assert_eq!(json["id"], "HOP-0001");
        assert_eq!(json["riskLetter"].as_str().map(|s| s.len()), Some(1));
        assert!(json["lastSeen"].as_str().unwrap().ends_with('Z'));
        assert_eq!(json["checks"].as_object().unwrap().len(), 7);
    }
}
