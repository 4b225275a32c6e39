// Read-side filters over the cached population and the event log
use serde::Deserialize;

use crate::domain::risk_event::{EventStatus, RiskEvent, Severity};
use crate::domain::robot::{CheckCode, RiskLetter, RiskLevel, RobotRecord, RobotStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RobotTab {
    #[default]
    All,
    HighRisk,
    History,
}

#[derive(Debug, Clone, Default)]
pub struct RobotQuery {
    pub group: Option<String>,
    pub tab: RobotTab,
    pub keyword: Option<String>,
    pub status: Option<RobotStatus>,
    pub risk_level: Option<RiskLevel>,
    pub letter: Option<RiskLetter>,
    /// With `checks_ok = Some(true)` every listed check must pass; with
    /// `Some(false)` at least one must fail. Ignored when `checks_ok` is unset.
    pub checks: Vec<CheckCode>,
    pub checks_ok: Option<bool>,
}

impl RobotQuery {
    pub fn matches(&self, robot: &RobotRecord) -> bool {
        let tab_ok = match self.tab {
            RobotTab::All => true,
            RobotTab::HighRisk => robot.is_high_risk,
            RobotTab::History => !robot.risk_history.is_empty(),
        };

        tab_ok
            && self.group.as_deref().is_none_or(|g| robot.group == g)
            && self.status.is_none_or(|s| robot.status == s)
            && self.risk_level.is_none_or(|l| robot.risk_level == l)
            && self.letter.is_none_or(|l| robot.risk_letter == l)
            && self.keyword_matches(robot)
            && self.checks_match(robot)
    }

    fn keyword_matches(&self, robot: &RobotRecord) -> bool {
        let Some(keyword) = self.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty()) else {
            return true;
        };
        let needle = keyword.to_lowercase();
        [
            robot.id.as_str(),
            robot.name.as_str(),
            robot.part_no.as_str(),
            robot.reference_no.as_str(),
            robot.type_spec,
            robot.tech.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn checks_match(&self, robot: &RobotRecord) -> bool {
        let Some(ok) = self.checks_ok else {
            return true;
        };
        if self.checks.is_empty() {
            return true;
        }
        let passed = |code: &CheckCode| robot.checks.get(code).is_some_and(|c| c.ok);
        if ok {
            self.checks.iter().all(passed)
        } else {
            self.checks.iter().any(|code| !passed(code))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub group: Option<String>,
    pub status: Option<EventStatus>,
    pub severity: Option<Severity>,
}

impl EventFilter {
    pub fn matches(&self, event: &RiskEvent) -> bool {
        self.group.as_deref().is_none_or(|g| event.group == g)
            && self.status.is_none_or(|s| event.status == s)
            && self.severity.is_none_or(|s| event.severity == s)
    }
}
