use super::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rectangle in which automatically created nodes are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementBounds {
    pub min: Position,
    pub max: Position,
}

impl PlacementBounds {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    fn is_degenerate(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }
}

impl Default for PlacementBounds {
    fn default() -> Self {
        Self {
            min: Position::new(100.0, 100.0),
            max: Position::new(600.0, 300.0),
        }
    }
}

/// Source of randomized positions for nodes created by the assignment workflow.
#[derive(Debug, Clone)]
pub struct Placement {
    bounds: PlacementBounds,
    rng: StdRng,
}

impl Placement {
    /// Seeds from OS entropy.
    pub fn new(bounds: PlacementBounds) -> Self {
        Self {
            bounds,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic placement, mostly for tests and generated workspaces.
    pub fn seeded(bounds: PlacementBounds, seed: u64) -> Self {
        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn bounds(&self) -> PlacementBounds {
        self.bounds
    }

    /// Returns a position inside the bounds. A degenerate rectangle collapses to `min`.
    pub fn next_position(&mut self) -> Position {
        if self.bounds.is_degenerate() {
            return self.bounds.min;
        }
        let x = self.rng.random_range(self.bounds.min.x..self.bounds.max.x);
        let y = self.rng.random_range(self.bounds.min.y..self.bounds.max.y);
        Position::new(x, y)
    }
}
