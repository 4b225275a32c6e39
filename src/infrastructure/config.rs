use serde::Deserialize;
use std::collections::HashSet;

use crate::domain::group::Group;
use crate::error::{FleetError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/fleet";
const ENV_PREFIX: &str = "FLEET";

#[derive(Debug, Deserialize, Clone)]
pub struct FleetConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default = "default_groups")]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorSettings {
    pub default_points: usize,
    pub default_interval_seconds: u32,
    pub default_event_count: usize,
    pub max_points: usize,
    /// Longest telemetry window, `(points - 1) * interval`, in seconds.
    pub max_span_seconds: u64,
    pub max_events: usize,
    pub recent_event_limit: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_points: 60,
            default_interval_seconds: 60,
            default_event_count: 120,
            max_points: 5000,
            max_span_seconds: 30 * 24 * 3600,
            max_events: 5000,
            recent_event_limit: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub key: String,
    pub name: Option<String>,
    pub total: usize,
}

impl GroupConfig {
    fn new(key: &str, total: usize) -> Self {
        Self {
            key: key.to_string(),
            name: None,
            total,
        }
    }

    pub fn to_group(&self) -> Group {
        let name = self.name.clone().unwrap_or_else(|| self.key.clone());
        Group::new(self.key.clone(), name, self.total)
    }
}

pub fn default_groups() -> Vec<GroupConfig> {
    vec![
        GroupConfig::new("hop", 655),
        GroupConfig::new("reuse", 331),
        GroupConfig::new("254/214", 965),
        GroupConfig::new("engine", 88),
    ]
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            generator: GeneratorSettings::default(),
            groups: default_groups(),
        }
    }
}

impl FleetConfig {
    pub fn groups(&self) -> Vec<Group> {
        self.groups.iter().map(GroupConfig::to_group).collect()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.key.trim().is_empty() {
                return Err(invalid_config("group key must not be empty"));
            }
            if !seen.insert(group.key.as_str()) {
                return Err(invalid_config(format!("duplicate group key `{}`", group.key)));
            }
        }
        Ok(())
    }
}

fn invalid_config(message: impl Into<String>) -> FleetError {
    FleetError::Config(config::ConfigError::Message(message.into()))
}

/// Reads `{path}.toml` (optional) and `FLEET__*` overrides, e.g.
/// `FLEET__SERVER__BIND=127.0.0.1:9000`.
pub fn load_fleet_config(path: &str) -> Result<FleetConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let fleet: FleetConfig = settings.try_deserialize()?;
    fleet.validate()?;
    tracing::info!(path, groups = fleet.groups.len(), "loaded fleet configuration");
    Ok(fleet)
}
