// Attribute derivation - Correlated physical attributes, drawn in a fixed order

use chrono::{DateTime, Duration, Utc};

use super::rng::{clamp, round_half_up, SeededRng};
use crate::domain::robot::RobotStatus;

pub const MODELS: [&str; 4] = ["R-Atlas", "R-Nova", "R-Kite", "R-Edge"];
pub const WORK_MODES: [&str; 5] = ["patrol", "transport", "sorting", "delivery", "standby"];
pub const ZONES: [&str; 5] = ["Zone A", "Zone B", "Zone C", "Zone D", "Zone E"];

const PART_PREFIXES: [&str; 5] = ["UB41", "UB42", "UA20", "UD18", "UX07"];
const PART_FAMILIES: [&str; 4] = ["RB", "RC", "RD", "RE"];
const TYPE_SPECS: [&str; 8] = [
    "KR600_R2830_Fortec",
    "KR210_R3100_Quantec",
    "KR120_R2700_Quantec",
    "IRB_6700_205_2.75",
    "FANUC_M_900iB_700",
    "Kawasaki_RS080N",
    "UR10e_1300",
    "Yaskawa_GP225",
];
const TECH_TAGS: [&str; 9] = [
    "gripping",
    "gluing",
    "welding",
    "fastening",
    "painting",
    "palletizing",
    "handling",
    "inspection",
    "marking",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalAttributes {
    pub status: RobotStatus,
    pub model: &'static str,
    pub work_mode: &'static str,
    pub zone: &'static str,
    pub battery: u8,
    pub health: u8,
    pub motor_temp: u8,
    pub network_latency: u16,
    pub last_seen: DateTime<Utc>,
}

/// Catalog identifiers drawn after the risk history.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub part_no: String,
    pub reference_no: String,
    pub type_spec: &'static str,
    pub tech: String,
}

pub fn derive_status(rng: &mut SeededRng) -> RobotStatus {
    let r = rng.next_f64();
    if r < 0.78 {
        RobotStatus::Online
    } else if r < 0.90 {
        RobotStatus::Maintenance
    } else {
        RobotStatus::Offline
    }
}

pub fn derive_attributes(rng: &mut SeededRng, now: DateTime<Utc>) -> PhysicalAttributes {
    let status = derive_status(rng);
    let model = rng.pick(&MODELS);
    let work_mode = rng.pick(&WORK_MODES);
    let zone = rng.pick(&ZONES);

    let offline = status == RobotStatus::Offline;
    let maintenance = status == RobotStatus::Maintenance;

    let mut battery = round_half_up(rng.scaled(15.0, 85.0));
    if offline {
        battery = round_half_up(battery * rng.scaled(0.25, 0.45));
    }
    let battery = clamp(battery, 0.0, 100.0) as u8;

    let mut health = round_half_up(rng.scaled(62.0, 38.0));
    if maintenance {
        health -= round_half_up(rng.scaled(5.0, 15.0));
    }
    let health = clamp(health, 0.0, 100.0) as u8;

    let heat = if maintenance { 6.0 } else { 0.0 };
    let motor_temp = clamp(round_half_up(rng.scaled(52.0, 44.0) + heat), 35.0, 98.0) as u8;

    let lag = if offline { 160.0 } else { 0.0 };
    let network_latency = clamp(round_half_up(rng.scaled(20.0, 330.0) + lag), 10.0, 500.0) as u16;

    let window = if status == RobotStatus::Online { 40.0 } else { 320.0 };
    let minutes_ago = round_half_up(rng.next_f64() * window) as i64;
    let last_seen = now - Duration::minutes(minutes_ago);

    PhysicalAttributes {
        status,
        model,
        work_mode,
        zone,
        battery,
        health,
        motor_temp,
        network_latency,
        last_seen,
    }
}

pub fn derive_catalog_entry(rng: &mut SeededRng, now: DateTime<Utc>) -> CatalogEntry {
    let part_no = part_no(rng);
    let reference_no = reference_no(rng, now);
    let type_spec = rng.pick(&TYPE_SPECS);
    let tech = tech(rng);
    CatalogEntry {
        part_no,
        reference_no,
        type_spec,
        tech,
    }
}

fn part_no(rng: &mut SeededRng) -> String {
    let prefix = rng.pick(&PART_PREFIXES);
    let section = 1 + rng.index(99);
    let family = rng.pick(&PART_FAMILIES);
    let suffix = 1 + rng.index(180);
    format!("{prefix}_{section:03}{family}_{suffix:03}")
}

/// Service window as `YYMMDD-YYMMDD`, both ends in the past.
fn reference_no(rng: &mut SeededRng, now: DateTime<Utc>) -> String {
    let end_offset = 5 + rng.index(25) as i64;
    let start_offset = end_offset + 8 + rng.index(45) as i64;
    let end = now - Duration::days(end_offset);
    let start = now - Duration::days(start_offset);
    format!("{}-{}", start.format("%y%m%d"), end.format("%y%m%d"))
}

fn tech(rng: &mut SeededRng) -> String {
    let first = rng.pick(&TECH_TAGS);
    let mut second = rng.pick(&TECH_TAGS);
    if second == first {
        second = rng.pick(&TECH_TAGS);
    }
    if rng.next_f64() < 0.55 {
        format!("{first} + {second}")
    } else {
        first.to_string()
    }
}
