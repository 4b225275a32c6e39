// Robot group domain model
use serde::Serialize;

/// A named slice of the fleet. Groups are static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub key: String,
    pub display_name: String,
    pub total_count: usize,
}

impl Group {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>, total_count: usize) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            total_count,
        }
    }

    /// Prefix used for robot ids: "254/214" becomes "254-214".
    pub fn id_prefix(&self) -> String {
        self.key.replace('/', "-").to_uppercase()
    }

    /// Id of the robot at `index`, e.g. `HOP-0001` for index 0.
    pub fn robot_id(&self, index: usize) -> String {
        format!("{}-{:04}", self.id_prefix(), index + 1)
    }
}

/// Per-group counters folded over the cached population.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub maintenance: usize,
    pub high_risk: usize,
    pub history_high_risk: usize,
}
