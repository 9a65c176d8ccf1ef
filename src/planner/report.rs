//! The planning report returned to every caller, feasible or not.

use serde::Serialize;

use crate::planner::allocator::Allocation;
use crate::planner::LaneValues;

/// Classification of a planning run. Only the last two reach the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Home roster size is not exactly 60; nothing was attempted.
    CountMismatch,
    /// Home total power cannot cover the summed targets; nothing was attempted.
    InsufficientPower,
    /// Every lane meets its target.
    Success,
    /// Total power suffices but the greedy partition left a lane short.
    PartialShortfall,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CountMismatch => "count_mismatch",
            Self::InsufficientPower => "insufficient_power",
            Self::Success => "success",
            Self::PartialShortfall => "partial_shortfall",
        }
    }
}

/// Everything a caller needs to inspect a planning run: the intermediate
/// target arithmetic, the feasibility figures, and (when one was computed)
/// the full allocation. Built fresh per invocation and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub enemy_totals: LaneValues,
    pub targets: LaneValues,
    pub home_total_power: i64,
    pub required_total_power: i64,
    /// Home total minus required total; negative means infeasible by total.
    pub power_difference: i64,
    pub home_team_count: usize,
    pub outcome: Outcome,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_allocation: Option<Allocation>,
}
