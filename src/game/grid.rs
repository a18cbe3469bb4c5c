/// A grid-aligned pixel coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Screen geometry: pixel dimensions divided into square cells.
///
/// Both axes wrap, so the grid is a torus. Dimensions are assumed to be
/// positive multiples of `cell_size`; `GameConfig::validate` enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(screen_width: i32, screen_height: i32, cell_size: i32) -> Self {
        Self {
            screen_width,
            screen_height,
            cell_size,
        }
    }

    /// Number of cells per row
    pub fn columns(&self) -> i32 {
        self.screen_width / self.cell_size
    }

    /// Number of cells per column
    pub fn rows(&self) -> i32 {
        self.screen_height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// The grid-aligned cell at (or just before) the middle of the screen
    pub fn center(&self) -> Cell {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size)
    }

    pub fn column_row(&self, cell: Cell) -> (i32, i32) {
        (cell.x / self.cell_size, cell.y / self.cell_size)
    }

    /// Fold arbitrary pixel coordinates back onto the screen
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        Cell::new(
            x.rem_euclid(self.screen_width),
            y.rem_euclid(self.screen_height),
        )
    }

    /// True when the cell lies on screen and on a cell boundary
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.screen_width).contains(&cell.x)
            && (0..self.screen_height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// All cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).map(move |column| self.cell_at(column, row))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(640, 480, 20)
    }
}
