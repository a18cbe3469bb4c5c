use rand::{Rng, seq::IteratorRandom};

use super::grid::{Cell, Grid};

/// Random draws tried before falling back to enumerating free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// The single piece of food on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    grid: Grid,
    position: Cell,
}

impl Food {
    /// Place food anywhere on the grid
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let mut food = Self::at(grid, grid.center());
        food.spawn(&[], rng);
        food
    }

    /// Food at a fixed cell
    pub fn at(grid: Grid, position: Cell) -> Self {
        Self { grid, position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a uniformly random cell outside `excluded`.
    ///
    /// Returns false, leaving the food where it was, only when `excluded`
    /// covers the whole grid.
    pub fn spawn<R: Rng + ?Sized>(&mut self, excluded: &[Cell], rng: &mut R) -> bool {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = self.grid.cell_at(
                rng.gen_range(0..self.grid.columns()),
                rng.gen_range(0..self.grid.rows()),
            );
            if !excluded.contains(&candidate) {
                self.position = candidate;
                return true;
            }
        }

        // Crowded grid: pick uniformly among what is left
        match self
            .grid
            .cells()
            .filter(|cell| !excluded.contains(cell))
            .choose(rng)
        {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => false,
        }
    }
}
