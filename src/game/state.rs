use super::{food::Food, grid::Grid, snake::Snake};

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid: Grid,
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            ticks: 0,
        }
    }

    /// True when the head sits on the food
    pub fn head_on_food(&self) -> bool {
        self.snake.head() == self.food.position()
    }
}
