//! Competitor - identity records and per-race entrant state
//!
//! A registry record carries identity only. An [`Entrant`] is the
//! motion state one competitor holds for a single simulation run;
//! it is seeded fresh at the start of every race.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A competitor as stored in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Unique registry ID
    pub id: u32,
    /// Display name
    pub name: String,
}

/// Per-race state for one competitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: u32,
    pub name: String,
    /// Distance covered per tick
    pub speed: u32,
    /// Distance covered so far
    pub position: f64,
}

impl Entrant {
    /// Slowest speed the draw can assign
    pub const MIN_SPEED: u32 = 1;
    /// Fastest speed the draw can assign
    pub const MAX_SPEED: u32 = 10;

    /// Create an entrant for a registry record with a freshly drawn speed
    pub fn seeded(competitor: &Competitor, rng: &mut impl Rng) -> Self {
        Self {
            id: competitor.id,
            name: competitor.name.clone(),
            speed: draw_speed(rng),
            position: 0.0,
        }
    }

    /// Advance one tick, clamping at the race distance
    pub fn advance(&mut self, distance: f64) {
        self.position = (self.position + f64::from(self.speed)).min(distance);
    }

    /// Whether this entrant has reached the race distance
    pub fn finished(&self, distance: f64) -> bool {
        self.position >= distance
    }
}

/// Draw a speed uniformly from the valid range.
///
/// Never returns zero; the stepper's termination bound relies on every
/// speed being strictly positive.
pub fn draw_speed(rng: &mut impl Rng) -> u32 {
    rng.gen_range(Entrant::MIN_SPEED..=Entrant::MAX_SPEED)
}

/// Seed a fresh set of entrants for the given registry records
pub fn seed_entrants(field: &[Competitor], rng: &mut impl Rng) -> Vec<Entrant> {
    field.iter().map(|c| Entrant::seeded(c, rng)).collect()
}
