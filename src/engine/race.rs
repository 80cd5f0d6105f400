//! Race - configuration, snapshots, ranking, and final results
//!
//! Holds the knobs a single run is parameterized by and the value
//! types a finished run produces.

use serde::{Deserialize, Serialize};

use crate::engine::competitor::Entrant;

/// When the stepper stops advancing ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Stop as soon as any entrant reaches the race distance
    FirstAcrossLine,
    /// Keep ticking until every entrant has reached it; finishers
    /// stay clamped at the line
    AllFinished,
}

/// How the ranker orders entrants at the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Higher speed ranks first; it would have pulled ahead had the
    /// race continued
    Speed,
    /// Equal positions keep input order
    None,
}

/// Race configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Total race distance
    pub distance: f64,
    /// Termination rule
    pub termination: Termination,
    /// Tie-break policy
    pub tie_break: TieBreak,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            distance: 10.0,
            termination: Termination::FirstAcrossLine,
            tie_break: TieBreak::Speed,
        }
    }
}

/// One entrant's recorded position within a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: u32,
    pub name: String,
    pub position: f64,
}

/// Positions of every entrant after one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-based tick number
    pub hour: u32,
    pub positions: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Value-copy the current entrant positions for the given tick
    pub fn capture(hour: u32, entrants: &[Entrant]) -> Self {
        Self {
            hour,
            positions: entrants
                .iter()
                .map(|e| SnapshotEntry {
                    id: e.id,
                    name: e.name.clone(),
                    position: e.position,
                })
                .collect(),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Ticks elapsed before the termination rule fired
    pub hours: u32,
    /// Entrants in final ranking order
    pub standings: Vec<Entrant>,
    /// Head of the standings
    pub winner: Entrant,
    /// One snapshot per executed tick
    pub history: Vec<Snapshot>,
}

/// Sort entrants into final ranking order.
///
/// Position descending, then the tie-break policy. The sort is stable,
/// so exact ties keep input order.
pub fn rank(mut entrants: Vec<Entrant>, tie_break: TieBreak) -> Vec<Entrant> {
    entrants.sort_by(|a, b| {
        let by_position = b.position.total_cmp(&a.position);
        match tie_break {
            TieBreak::Speed => by_position.then(b.speed.cmp(&a.speed)),
            TieBreak::None => by_position,
        }
    });
    entrants
}
