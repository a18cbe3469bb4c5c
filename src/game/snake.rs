use rand::Rng;

use super::{
    action::Direction,
    grid::{Cell, Grid},
};

/// What happened to the snake during a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The head advanced onto a free cell
    Moved,
    /// The head ran into the body; the snake has already been respawned
    Collided,
}

/// The player-controlled snake
///
/// The body is ordered head-first. `size` is the target length: each move
/// keeps one extra tail cell until the body catches up with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    body: Vec<Cell>,
    size: usize,
    direction: Direction,
    queued_direction: Option<Direction>,
    vacated_tail: Option<Cell>,
}

impl Snake {
    /// A single-cell snake at the screen center heading right
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            body: vec![grid.center()],
            size: 1,
            direction: Direction::Right,
            queued_direction: None,
            vacated_tail: None,
        }
    }

    /// Build a snake from an explicit head-first body. The target size is
    /// the body length.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn with_body(grid: Grid, body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake body must have a head");
        Self {
            grid,
            size: body.len(),
            body,
            direction,
            queued_direction: None,
            vacated_tail: None,
        }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Body segments behind the head
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true; the head always exists
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn queued_direction(&self) -> Option<Direction> {
        self.queued_direction
    }

    /// The tail cell dropped by the last move, if any
    pub fn vacated_tail(&self) -> Option<Cell> {
        self.vacated_tail
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queue a turn for the next tick. A turn straight back against the
    /// current direction is rejected. Only the current direction is
    /// checked, so two quick presses within one tick can still queue a
    /// reversal.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.queued_direction = Some(direction);
        true
    }

    /// Apply the queued turn, if any
    pub fn change_direction(&mut self) {
        if let Some(direction) = self.queued_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell in the current direction, wrapping at the screen
    /// edges. Running into the body respawns the snake before returning.
    pub fn move_forward<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MoveOutcome {
        let head = self.head();
        let (dx, dy) = self.direction.delta();
        let new_head = self.grid.wrap(
            head.x + dx * self.grid.cell_size,
            head.y + dy * self.grid.cell_size,
        );

        self.body.insert(0, new_head);

        self.vacated_tail = if self.body.len() > self.size {
            self.body.pop()
        } else {
            None
        };

        if self.body_segments().contains(&new_head) {
            self.respawn(rng);
            return MoveOutcome::Collided;
        }

        MoveOutcome::Moved
    }

    /// Raise the target size by one; the body catches up on the next move
    pub fn grow(&mut self) {
        self.size += 1;
    }

    /// Reset to a single cell at the center with a random heading
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.clear();
        self.body.push(self.grid.center());
        self.size = 1;
        self.direction = Direction::random(rng);
        self.queued_direction = None;
        self.vacated_tail = None;
    }
}
