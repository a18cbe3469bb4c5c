use crate::game::{Cell, Food, GameState, Grid, Snake};

/// What a single grid cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Background,
    Body,
    Head,
    Food,
}

/// Something that can be painted onto the scene
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Snake(&'a Snake),
    Food(&'a Food),
}

/// A frame as a row-major grid of tiles
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    grid: Grid,
    tiles: Vec<Tile>,
}

impl Scene {
    /// Blank scene
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            tiles: vec![Tile::Background; grid.cell_count()],
        }
    }

    /// Clear, then the snake (with its vacated tail erased), then the food
    pub fn compose(state: &GameState) -> Self {
        let mut scene = Self::new(state.grid);
        scene.paint(Entity::Snake(&state.snake));
        scene.paint(Entity::Food(&state.food));
        scene
    }

    pub fn paint(&mut self, entity: Entity<'_>) {
        match entity {
            Entity::Snake(snake) => {
                for segment in snake.body_segments() {
                    self.set(*segment, Tile::Body);
                }
                self.set(snake.head(), Tile::Head);
                if let Some(tail) = snake.vacated_tail().filter(|t| !snake.occupies(*t)) {
                    self.set(tail, Tile::Background);
                }
            }
            Entity::Food(food) => self.set(food.position(), Tile::Food),
        }
    }

    pub fn tile(&self, cell: Cell) -> Tile {
        self.index(cell)
            .map(|i| self.tiles[i])
            .unwrap_or(Tile::Background)
    }

    /// Tiles of one grid row, left to right
    pub fn row(&self, row: i32) -> &[Tile] {
        let columns = self.grid.columns() as usize;
        let start = row as usize * columns;
        &self.tiles[start..start + columns]
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = tile;
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.grid.contains(cell) {
            return None;
        }
        let (column, row) = self.grid.column_row(cell);
        Some((row * self.grid.columns() + column) as usize)
    }
}
