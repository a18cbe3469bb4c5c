use log::{debug, warn};
use rand::{SeedableRng, rngs::StdRng};

use super::{
    config::GameConfig,
    food::Food,
    grid::Grid,
    snake::{MoveOutcome, Snake},
    state::GameState,
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The head landed on the food
    pub ate_food: bool,
    /// The snake hit itself and was respawned
    pub collided: bool,
}

/// Applies the per-tick rules to a `GameState`
pub struct GameEngine {
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            grid: config.grid(),
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Fresh game: a one-cell snake at the center and food anywhere
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(self.grid);
        let food = Food::new(self.grid, &mut self.rng);
        GameState::new(snake, food, self.grid)
    }

    /// Turn, move, then eat
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        state.snake.change_direction();
        let collided = state.snake.move_forward(&mut self.rng) == MoveOutcome::Collided;
        if collided {
            debug!("snake hit itself at tick {}, respawned", state.ticks);
        }

        let ate_food = state.head_on_food();
        if ate_food {
            state.snake.grow();
            if !state.food.spawn(state.snake.body(), &mut self.rng) {
                warn!("no free cell left for food");
            }
            debug!(
                "food eaten at tick {}, size now {}",
                state.ticks,
                state.snake.size()
            );
        }

        state.ticks += 1;

        TickOutcome { ate_food, collided }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction};

    fn seeded() -> GameEngine {
        GameEngine::new(&GameConfig {
            seed: Some(11),
            ..Default::default()
        })
    }

    #[test]
    fn test_new_game() {
        let mut engine = seeded();
        let state = engine.new_game();

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Cell::new(320, 240));
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!(state.grid.contains(state.food.position()));
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_tick_without_input() {
        let mut engine = seeded();
        let grid = engine.grid();
        let mut state = GameState::new(
            Snake::new(grid),
            Food::at(grid, Cell::new(0, 0)),
            grid,
        );

        let outcome = engine.tick(&mut state);

        assert_eq!(state.snake.head(), Cell::new(340, 240));
        assert_eq!(state.food.position(), Cell::new(0, 0));
        assert!(!outcome.ate_food);
        assert!(!outcome.collided);
        assert_eq!(state.snake.vacated_tail(), Some(Cell::new(320, 240)));
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        let mut engine = seeded();
        let grid = engine.grid();
        let mut state = GameState::new(
            Snake::new(grid),
            Food::at(grid, Cell::new(360, 240)),
            grid,
        );

        let first = engine.tick(&mut state);
        assert!(!first.ate_food);
        assert_eq!(state.food.position(), Cell::new(360, 240));

        let second = engine.tick(&mut state);
        assert!(second.ate_food);
        assert_eq!(state.snake.head(), Cell::new(360, 240));
        assert_eq!(state.snake.size(), 2);
        assert_ne!(state.food.position(), Cell::new(360, 240));
        assert!(!state.snake.occupies(state.food.position()));

        // The extra segment appears on the following move
        engine.tick(&mut state);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_queued_turn_applied_on_tick() {
        let mut engine = seeded();
        let grid = engine.grid();
        let mut state = GameState::new(
            Snake::new(grid),
            Food::at(grid, Cell::new(0, 0)),
            grid,
        );

        assert!(state.snake.queue_direction(Direction::Down));
        engine.tick(&mut state);

        assert_eq!(state.snake.direction(), Direction::Down);
        assert_eq!(state.snake.head(), Cell::new(320, 260));
    }

    #[test]
    fn test_collision_is_recovered_in_same_tick() {
        let mut engine = seeded();
        let grid = engine.grid();
        let body = vec![
            Cell::new(40, 20),
            Cell::new(40, 40),
            Cell::new(20, 40),
            Cell::new(20, 20),
            Cell::new(0, 20),
        ];
        let mut state = GameState::new(
            Snake::with_body(grid, body, Direction::Left),
            Food::at(grid, Cell::new(600, 400)),
            grid,
        );

        let outcome = engine.tick(&mut state);

        assert!(outcome.collided);
        assert_eq!(state.snake.vacated_tail(), None);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), grid.center());

        // Play continues
        engine.tick(&mut state);
        assert_eq!(state.ticks, 2);
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let mut a = seeded();
        let mut b = seeded();
        assert_eq!(a.new_game(), b.new_game());
    }
}
