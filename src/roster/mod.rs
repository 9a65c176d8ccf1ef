//! Roster parsing: turns free-form power listings into (id, power) teams.

pub mod validate;

use serde::{Deserialize, Serialize};

/// One competitive unit: an integer id and an integer power score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub power: i64,
}

/// Extracts every run of decimal digits from `text`, pairs them consecutively
/// as (id, power), and returns the teams sorted by power descending. A trailing
/// unpaired integer is discarded. The sort is stable, so teams with equal power
/// keep their input order.
pub fn parse_power_text(text: &str) -> Vec<Team> {
    let numbers = extract_integers(text);
    let mut teams: Vec<Team> = numbers
        .chunks_exact(2)
        .map(|pair| Team {
            id: pair[0],
            power: pair[1],
        })
        .collect();
    teams.sort_by(|a, b| b.power.cmp(&a.power));
    teams
}

pub fn total_power(teams: &[Team]) -> i64 {
    teams.iter().map(|team| team.power).sum()
}

fn extract_integers(text: &str) -> Vec<i64> {
    let mut numbers = Vec::new();
    let mut current: Option<i64> = None;

    for byte in text.bytes() {
        if byte.is_ascii_digit() {
            let digit = i64::from(byte - b'0');
            // Digit runs longer than i64 saturate instead of failing; the
            // input format places no bound on their length.
            current = Some(
                current
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(digit),
            );
        } else if let Some(value) = current.take() {
            numbers.push(value);
        }
    }
    if let Some(value) = current {
        numbers.push(value);
    }
    numbers
}

#[cfg(test)]
mod tests {
    use super::{parse_power_text, total_power, Team};

    #[test]
    fn pairs_consecutive_integers_and_sorts_by_power_descending() {
        let teams = parse_power_text("1 500\n2 900, 3:700");
        assert_eq!(
            teams,
            vec![
                Team { id: 2, power: 900 },
                Team { id: 3, power: 700 },
                Team { id: 1, power: 500 },
            ]
        );
    }

    #[test]
    fn trailing_unpaired_integer_is_discarded() {
        let teams = parse_power_text("7 100 8");
        assert_eq!(teams, vec![Team { id: 7, power: 100 }]);
    }

    #[test]
    fn equal_powers_keep_input_order() {
        let teams = parse_power_text("5 100 9 100 1 100");
        let ids: Vec<i64> = teams.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 9, 1]);
    }

    #[test]
    fn non_digit_noise_is_ignored() {
        let teams = parse_power_text("id=4 power=250;");
        assert_eq!(teams, vec![Team { id: 4, power: 250 }]);
    }

    #[test]
    fn empty_input_yields_empty_roster() {
        assert!(parse_power_text("").is_empty());
        assert!(parse_power_text("no numbers here").is_empty());
    }

    #[test]
    fn oversized_digit_runs_saturate() {
        let teams = parse_power_text("1 99999999999999999999999999");
        assert_eq!(teams[0].power, i64::MAX);
    }

    #[test]
    fn total_power_sums_all_teams() {
        let teams = parse_power_text("1 100 2 200 3 300");
        assert_eq!(total_power(&teams), 600);
    }
}
