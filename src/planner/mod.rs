//! Engagement planning: lane targets, feasibility, and the greedy allocator.

pub mod allocator;
pub mod report;

use serde::{Deserialize, Serialize};

use crate::planner::allocator::allocate;
use crate::planner::report::{Outcome, Report};
use crate::roster::{total_power, Team};

/// Exact number of home teams a plan operates on.
pub const ROSTER_SIZE: usize = 60;
/// Maximum number of teams a single lane can hold.
pub const LANE_CAPACITY: usize = 20;

/// One of the three parallel competition tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    /// Fixed iteration order. Deficit ties between lanes resolve to the
    /// earliest lane in this order, so plans are reproducible.
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// One integer per lane; used for enemy totals, advantage margins, and targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneValues {
    pub left: i64,
    pub center: i64,
    pub right: i64,
}

impl LaneValues {
    pub fn new(left: i64, center: i64, right: i64) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    pub fn get(&self, lane: Lane) -> i64 {
        match lane {
            Lane::Left => self.left,
            Lane::Center => self.center,
            Lane::Right => self.right,
        }
    }

    pub fn sum(&self) -> i64 {
        self.left + self.center + self.right
    }
}

/// Per-lane target power: the enemy's lane total plus the caller's advantage
/// margin. A negative margin means "willing to lose by this much".
pub fn compute_targets(enemy_totals: LaneValues, advantages: LaneValues) -> LaneValues {
    LaneValues {
        left: enemy_totals.left + advantages.left,
        center: enemy_totals.center + advantages.center,
        right: enemy_totals.right + advantages.right,
    }
}

/// Runs a full planning pass: targets, feasibility checks, and (when feasible)
/// the greedy allocation. Infeasibility is reported in the returned [`Report`],
/// never as an error.
pub fn plan_engagement(home: &[Team], enemy_totals: LaneValues, advantages: LaneValues) -> Report {
    let targets = compute_targets(enemy_totals, advantages);
    let home_total = total_power(home);
    let required_total = targets.sum();
    let power_difference = home_total - required_total;

    let mut rep = Report {
        enemy_totals,
        targets,
        home_total_power: home_total,
        required_total_power: required_total,
        power_difference,
        home_team_count: home.len(),
        outcome: Outcome::Success,
        summary: String::new(),
        best_allocation: None,
    };

    if home.len() != ROSTER_SIZE {
        rep.outcome = Outcome::CountMismatch;
        rep.summary = format!(
            "Roster has {} teams, expected exactly {ROSTER_SIZE}; allocation was not attempted.",
            home.len()
        );
        return rep;
    }

    if power_difference < 0 {
        rep.outcome = Outcome::InsufficientPower;
        rep.summary = format!(
            "Total power is insufficient: {} more points are needed to cover all three lane targets.",
            -power_difference
        );
        return rep;
    }

    // Strongest-first placement; the parser already orders by power, but a
    // caller-built roster may not, and the stable sort keeps equal-power
    // teams in their given order either way.
    let mut sorted: Vec<Team> = home.to_vec();
    sorted.sort_by(|a, b| b.power.cmp(&a.power));

    let allocation = allocate(&sorted, targets);
    rep.outcome = if allocation.success {
        Outcome::Success
    } else {
        Outcome::PartialShortfall
    };
    rep.summary = if allocation.success {
        "Found a feasible assignment; every lane meets its target.".to_string()
    } else {
        "Total power is sufficient but the greedy pass left one or more lanes short; \
         adjust the advantage margins or rebalance manually."
            .to_string()
    };
    rep.best_allocation = Some(allocation);
    rep
}
