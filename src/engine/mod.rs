//! Race Engine Module
//!
//! Pure, synchronous race simulation: speed assignment, the tick
//! stepper, ranking, and per-tick history capture. Performs no I/O;
//! the HTTP layer feeds it registry records and persists what it
//! returns.

pub mod competitor;
pub mod race;
pub mod simulation;

pub use competitor::{seed_entrants, Competitor, Entrant};
pub use race::{RaceConfig, RaceResult, Snapshot, Termination, TieBreak};
pub use simulation::{run_race, SimulationError};
