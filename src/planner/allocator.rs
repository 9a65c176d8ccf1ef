//! Deficit-priority greedy allocation of home teams across the three lanes.

use serde::Serialize;

use crate::planner::{Lane, LaneValues, LANE_CAPACITY};
use crate::roster::Team;

/// Final state of one lane after allocation. `teams` is sorted by id
/// ascending for stable presentation; assignment order is not preserved.
#[derive(Debug, Clone, Serialize)]
pub struct LaneAssignment {
    pub teams: Vec<Team>,
    pub total_power: i64,
    pub target: i64,
    pub difference: i64,
    pub count: usize,
    pub is_success: bool,
}

/// Complete partition of the home roster plus per-lane and overall verdicts.
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub left: LaneAssignment,
    pub center: LaneAssignment,
    pub right: LaneAssignment,
    /// Teams that could not be placed because every lane was full. Stays 0
    /// whenever the roster size matches the combined lane capacity.
    pub unplaced: usize,
    pub success: bool,
}

impl Allocation {
    pub fn lane(&self, lane: Lane) -> &LaneAssignment {
        match lane {
            Lane::Left => &self.left,
            Lane::Center => &self.center,
            Lane::Right => &self.right,
        }
    }
}

struct LaneState {
    target: i64,
    teams: Vec<Team>,
    power: i64,
}

impl LaneState {
    fn new(target: i64) -> Self {
        Self {
            target,
            teams: Vec::with_capacity(LANE_CAPACITY),
            power: 0,
        }
    }

    fn deficit(&self) -> i64 {
        self.target - self.power
    }

    fn is_full(&self) -> bool {
        self.teams.len() >= LANE_CAPACITY
    }

    fn into_assignment(mut self) -> LaneAssignment {
        self.teams.sort_by_key(|team| team.id);
        let difference = self.power - self.target;
        LaneAssignment {
            count: self.teams.len(),
            teams: self.teams,
            total_power: self.power,
            target: self.target,
            difference,
            is_success: difference >= 0,
        }
    }
}

/// Places `teams` one at a time into whichever lane currently has the largest
/// unmet deficit, skipping lanes that are at capacity. `teams` must already be
/// sorted by power descending: the strongest placements are made while the
/// deficits carry the most information, which keeps the three lanes converging
/// toward their targets roughly in step.
///
/// Deficit ties resolve to the earliest lane in [`Lane::ALL`] order, so the
/// same input always produces the same partition. Never errors: missing a
/// target is an ordinary unsuccessful result, not a fault.
pub fn allocate(teams: &[Team], targets: LaneValues) -> Allocation {
    let mut lanes: [LaneState; 3] = Lane::ALL.map(|lane| LaneState::new(targets.get(lane)));
    let mut unplaced = 0usize;

    for team in teams {
        let mut best: Option<(usize, i64)> = None;
        for (index, lane) in lanes.iter().enumerate() {
            if lane.is_full() {
                continue;
            }
            let deficit = lane.deficit();
            if best.map_or(true, |(_, best_deficit)| deficit > best_deficit) {
                best = Some((index, deficit));
            }
        }

        match best {
            Some((index, _)) => {
                lanes[index].power += team.power;
                lanes[index].teams.push(*team);
            }
            None => unplaced += 1,
        }
    }

    let [left, center, right] = lanes;
    let left = left.into_assignment();
    let center = center.into_assignment();
    let right = right.into_assignment();
    let success = left.is_success && center.is_success && right.is_success;

    Allocation {
        left,
        center,
        right,
        unplaced,
        success,
    }
}
