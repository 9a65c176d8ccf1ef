//! Diagnostics for parsed rosters before they reach the planner.

use std::collections::HashMap;
use std::fmt;

use crate::planner::ROSTER_SIZE;
use crate::roster::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(&mut self, severity: ValidationSeverity, message: impl Into<String>) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Checks a parsed home roster for problems the planner would otherwise
/// surface late (wrong count) or not at all (duplicate ids, zero power).
pub fn validate_roster(teams: &[Team]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if teams.is_empty() {
        report.push(
            ValidationSeverity::Error,
            "no (id, power) pairs found in input",
        );
        return report;
    }

    if teams.len() != ROSTER_SIZE {
        report.push(
            ValidationSeverity::Error,
            format!(
                "roster has {} teams, expected exactly {ROSTER_SIZE}",
                teams.len()
            ),
        );
    }

    let mut seen: HashMap<i64, usize> = HashMap::new();
    for team in teams {
        *seen.entry(team.id).or_insert(0) += 1;
    }
    let mut duplicate_ids: Vec<i64> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();
    duplicate_ids.sort_unstable();
    for id in duplicate_ids {
        report.push(
            ValidationSeverity::Warning,
            format!("team id {id} appears more than once"),
        );
    }

    let zero_power = teams.iter().filter(|team| team.power == 0).count();
    if zero_power > 0 {
        report.push(
            ValidationSeverity::Info,
            format!("{zero_power} team(s) have zero power"),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::{validate_roster, ValidationSeverity};
    use crate::roster::Team;

    fn roster_of(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| Team {
                id: i as i64,
                power: 100,
            })
            .collect()
    }

    #[test]
    fn full_roster_passes() {
        let report = validate_roster(&roster_of(60));
        assert!(!report.has_errors());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn short_roster_is_an_error_with_count() {
        let report = validate_roster(&roster_of(59));
        assert!(report.has_errors());
        assert!(report.diagnostics[0].message.contains("59"));
    }

    #[test]
    fn empty_roster_is_an_error() {
        let report = validate_roster(&[]);
        assert!(report.has_errors());
    }

    #[test]
    fn duplicate_ids_warn_but_do_not_fail() {
        let mut teams = roster_of(60);
        teams[1].id = 0;
        let report = validate_roster(&teams);
        assert!(!report.has_errors());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.severity == ValidationSeverity::Warning && d.message.contains("id 0")));
    }

    #[test]
    fn zero_power_teams_are_reported_as_info() {
        let mut teams = roster_of(60);
        teams[5].power = 0;
        let report = validate_roster(&teams);
        assert!(!report.has_errors());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.severity == ValidationSeverity::Info));
    }
}
