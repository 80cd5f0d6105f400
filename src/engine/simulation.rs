//! Simulation - the discrete-time stepper
//!
//! Runs a full race to completion: validates the field, ticks every
//! entrant forward until the termination rule fires, records a
//! snapshot per tick, and ranks the final positions.

use crate::engine::competitor::Entrant;
use crate::engine::race::{rank, RaceConfig, RaceResult, Snapshot, Termination};

/// Validation failures surfaced before or at the start of a run
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Race distance non-positive or non-finite
    #[error("race distance must be a positive number, got {0}")]
    InvalidDistance(f64),
    /// Zero competitors entered
    #[error("no competitors entered the race")]
    NoEntrants,
    /// A zero speed would break the termination bound
    #[error("competitor {id} has invalid speed {speed}")]
    InvalidSpeed { id: u32, speed: u32 },
}

/// Run a race to completion.
///
/// Takes ownership of the entrant state; callers keep their registry
/// records untouched and receive all final state in the result.
/// Positions are reset to zero before the first tick, so stale motion
/// state from a previous run never leaks in.
///
/// Terminates in at most `ceil(distance / min_speed)` ticks because
/// every speed is strictly positive.
pub fn run_race(
    mut entrants: Vec<Entrant>,
    config: &RaceConfig,
) -> Result<RaceResult, SimulationError> {
    if !config.distance.is_finite() || config.distance <= 0.0 {
        return Err(SimulationError::InvalidDistance(config.distance));
    }
    if entrants.is_empty() {
        return Err(SimulationError::NoEntrants);
    }
    if let Some(bad) = entrants.iter().find(|e| e.speed < Entrant::MIN_SPEED) {
        return Err(SimulationError::InvalidSpeed {
            id: bad.id,
            speed: bad.speed,
        });
    }

    for entrant in &mut entrants {
        entrant.position = 0.0;
    }

    let mut hour = 0u32;
    let mut history = Vec::new();
    loop {
        hour += 1;
        for entrant in &mut entrants {
            entrant.advance(config.distance);
        }
        history.push(Snapshot::capture(hour, &entrants));

        let done = match config.termination {
            Termination::FirstAcrossLine => entrants.iter().any(|e| e.finished(config.distance)),
            Termination::AllFinished => entrants.iter().all(|e| e.finished(config.distance)),
        };
        if done {
            break;
        }
    }

    let standings = rank(entrants, config.tie_break);
    let winner = standings
        .first()
        .cloned()
        .ok_or(SimulationError::NoEntrants)?;

    Ok(RaceResult {
        hours: hour,
        standings,
        winner,
        history,
    })
}
