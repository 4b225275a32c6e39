// Robot record domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    Online,
    Offline,
    Maintenance,
}

/// Four-step bucket of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => RiskLevel::Critical,
            80.. => RiskLevel::High,
            60.. => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// Three-step bucket used by the list views; `H` marks a high-risk unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLetter {
    L,
    M,
    H,
}

impl RiskLetter {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => RiskLetter::H,
            65.. => RiskLetter::M,
            _ => RiskLetter::L,
        }
    }
}

/// The seven diagnostic probes, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CheckCode {
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
}

impl CheckCode {
    pub const ALL: [CheckCode; 7] = [
        CheckCode::A1,
        CheckCode::A2,
        CheckCode::A3,
        CheckCode::A4,
        CheckCode::A5,
        CheckCode::A6,
        CheckCode::A7,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCode::A1 => "A1",
            CheckCode::A2 => "A2",
            CheckCode::A3 => "A3",
            CheckCode::A4 => "A4",
            CheckCode::A5 => "A5",
            CheckCode::A6 => "A6",
            CheckCode::A7 => "A7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckCode::A1 => "power/harness",
            CheckCode::A2 => "thermal/cooling",
            CheckCode::A3 => "network/comms",
            CheckCode::A4 => "sensors/alignment",
            CheckCode::A5 => "gripper/actuator",
            CheckCode::A6 => "control/program",
            CheckCode::A7 => "safety/e-stop",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        CheckCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticCheck {
    pub ok: bool,
    pub label: &'static str,
}

/// A past risk reading for one robot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSnapshot {
    pub id: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time: DateTime<Utc>,
    pub score: u8,
    pub level: RiskLevel,
}

/// One synthetic fleet unit. Created once per generation pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotRecord {
    pub id: String,
    pub group: String,
    pub name: String,
    pub model: &'static str,
    pub status: RobotStatus,
    pub battery: u8,
    pub health: u8,
    pub motor_temp: u8,
    pub network_latency: u16,
    pub work_mode: &'static str,
    pub zone: &'static str,
    #[serde(serialize_with = "timestamp::serialize")]
    pub last_seen: DateTime<Utc>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_letter: RiskLetter,
    pub is_high_risk: bool,
    pub risk_reason: &'static str,
    pub remark: String,
    pub part_no: String,
    pub reference_no: String,
    pub type_spec: &'static str,
    pub tech: String,
    pub checks: BTreeMap<CheckCode, DiagnosticCheck>,
    pub risk_history: Vec<RiskSnapshot>,
}

impl RobotRecord {
    pub fn failing_checks(&self) -> impl Iterator<Item = CheckCode> + '_ {
        self.checks
            .iter()
            .filter(|(_, check)| !check.ok)
            .map(|(code, _)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(89), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(90), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn test_risk_letter_thresholds() {
        assert_eq!(RiskLetter::from_score(64), RiskLetter::L);
        assert_eq!(RiskLetter::from_score(65), RiskLetter::M);
        assert_eq!(RiskLetter::from_score(84), RiskLetter::M);
        assert_eq!(RiskLetter::from_score(85), RiskLetter::H);
    }

    #[test]
    fn test_check_code_parse() {
        assert_eq!(CheckCode::parse("a3"), Some(CheckCode::A3));
        assert_eq!(CheckCode::parse(" A7 "), Some(CheckCode::A7));
        assert_eq!(CheckCode::parse("A8"), None);
    }

    #[test]
    fn test_check_code_serializes_as_map_key() {
        let mut checks = BTreeMap::new();
        checks.insert(CheckCode::A2, DiagnosticCheck { ok: false, label: CheckCode::A2.label() });
        let json = serde_json::to_string(&checks).unwrap();
        assert_eq!(json, r#"{"A2":{"ok":false,"label":"thermal/cooling"}}"#);
    }
}
