use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::scene::{Scene, Tile};
use crate::game::GameState;
use crate::metrics::GameMetrics;

const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);
const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(metrics), chunks[0]);

        let scene = Scene::compose(state);
        frame.render_widget(self.render_grid(&scene), chunks[1]);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, scene: &Scene) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..scene.grid().rows())
            .map(|row| {
                let spans: Vec<Span> = scene
                    .row(row)
                    .iter()
                    .map(|tile| Self::tile_span(*tile))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    /// Two terminal columns per cell: a filled square with a border-colored rim
    fn tile_span(tile: Tile) -> Span<'static> {
        let filled = Style::default().fg(BORDER_COLOR);
        match tile {
            Tile::Background => Span::styled("  ", Style::default().bg(BACKGROUND_COLOR)),
            Tile::Body => Span::styled("[]", filled.bg(SNAKE_COLOR)),
            Tile::Head => Span::styled(
                "[]",
                filled.bg(SNAKE_COLOR).add_modifier(Modifier::BOLD),
            ),
            Tile::Food => Span::styled("[]", filled.bg(FOOD_COLOR)),
        }
    }

    fn render_stats(&self, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                metrics.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.longest_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Eaten: ", label),
            Span::styled(metrics.food_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(metrics.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
