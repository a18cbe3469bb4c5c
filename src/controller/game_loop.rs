use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, GameState, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Owns the snake and food and drives them at a fixed tick rate
pub struct GameLoop {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval: config.tick_interval(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal, leaving raw mode again if any later step fails
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = restore_on_error(Self::setup_terminal(), || {
            let _ = execute!(stderr(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!("stopped after {} ticks", self.state.ticks);
        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Slow ticks run late rather than bunching up
        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Keys queue a turn; it is applied on the next tick
                maybe_event = event_stream.next() => {
                    if let Some(event) = maybe_event {
                        let event = event.context("Failed to read terminal event")?;
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.step();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    self.state.snake.queue_direction(direction);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// One tick of game logic
    fn step(&mut self) -> TickOutcome {
        let outcome = self.engine.tick(&mut self.state);
        self.metrics.record_tick(&outcome, &self.state);
        outcome
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Run `restore` when `result` is an error, then hand the result back
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, Food};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn seeded_loop() -> GameLoop {
        GameLoop::new(&GameConfig {
            seed: Some(5),
            ..Default::default()
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initialization() {
        let game = seeded_loop();
        assert_eq!(game.state.snake.len(), 1);
        assert_eq!(game.state.snake.head(), Cell::new(320, 240));
        assert_eq!(game.tick_interval, Duration::from_millis(100));
        assert!(!game.should_quit);
    }

    #[test]
    fn test_turn_key_is_applied_on_next_tick() {
        let mut game = seeded_loop();
        game.handle_event(key(KeyCode::Up));

        assert_eq!(game.state.snake.direction(), Direction::Right);
        game.step();
        assert_eq!(game.state.snake.direction(), Direction::Up);
        assert_eq!(game.state.snake.head(), Cell::new(320, 220));
    }

    #[test]
    fn test_reverse_key_is_ignored() {
        let mut game = seeded_loop();
        game.handle_event(key(KeyCode::Left));
        game.step();
        assert_eq!(game.state.snake.direction(), Direction::Right);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut game = seeded_loop();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        game.handle_event(Event::Key(release));
        assert!(!game.should_quit);
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: Result<()> = restore_on_error(Err(anyhow::anyhow!("no tty")), || {
            restored = true;
        });
        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let mut restored = false;
        let result = restore_on_error(Ok(7), || restored = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn test_quit_key() {
        let mut game = seeded_loop();
        game.handle_event(key(KeyCode::Esc));
        assert!(game.should_quit);
    }

    #[test]
    fn test_scenario_move_then_eat() {
        let mut game = seeded_loop();
        let grid = game.state.grid;
        game.state.food = Food::at(grid, Cell::new(360, 240));

        // No input: one cell right, food untouched
        let outcome = game.step();
        assert_eq!(game.state.snake.head(), Cell::new(340, 240));
        assert_eq!(game.state.food.position(), Cell::new(360, 240));
        assert!(!outcome.ate_food);

        // Head lands on the food
        let outcome = game.step();
        assert!(outcome.ate_food);
        assert_eq!(game.state.snake.size(), 2);
        assert_ne!(game.state.food.position(), Cell::new(360, 240));
        assert!(!game.state.snake.occupies(game.state.food.position()));
        assert_eq!(game.metrics.food_eaten, 1);
    }
}
