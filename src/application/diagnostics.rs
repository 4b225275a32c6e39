// Diagnostics - Seven checks with risk-correlated failure odds

use std::collections::BTreeMap;

use super::attributes::PhysicalAttributes;
use super::risk::LOW_BATTERY_HINT;
use super::rng::SeededRng;
use crate::domain::robot::{CheckCode, DiagnosticCheck, RiskLetter, RiskLevel};

fn base_failure_rate(score: u8) -> f64 {
    match RiskLevel::from_score(score) {
        RiskLevel::Critical => 0.18,
        RiskLevel::High => 0.12,
        _ => 0.06,
    }
}

pub fn failure_probability(code: CheckCode, attrs: &PhysicalAttributes, score: u8) -> f64 {
    let bias = match code {
        CheckCode::A2 if attrs.is_hot() => 0.12,
        CheckCode::A3 if attrs.is_lagging() => 0.10,
        CheckCode::A1 if attrs.battery <= LOW_BATTERY_HINT => 0.08,
        _ => 0.0,
    };
    base_failure_rate(score) + bias
}

/// Draws one value per check in code order. A high-risk unit always ends up
/// with at least one failing check.
pub fn run_checks(
    rng: &mut SeededRng,
    attrs: &PhysicalAttributes,
    score: u8,
) -> BTreeMap<CheckCode, DiagnosticCheck> {
    let mut checks: BTreeMap<CheckCode, DiagnosticCheck> = CheckCode::ALL
        .into_iter()
        .map(|code| {
            let ok = rng.next_f64() >= failure_probability(code, attrs, score);
            (code, DiagnosticCheck { ok, label: code.label() })
        })
        .collect();

    if RiskLetter::from_score(score) == RiskLetter::H && checks.values().all(|c| c.ok) {
        let forced = if attrs.is_hot() {
            CheckCode::A2
        } else if attrs.is_lagging() {
            CheckCode::A3
        } else {
            CheckCode::A6
        };
        if let Some(check) = checks.get_mut(&forced) {
            check.ok = false;
        }
    }

    checks
}
