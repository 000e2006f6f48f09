use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position};
use crate::input::Button;
use crate::metrics::GameMetrics;

const OVERLAY_WIDTH: u16 = 34;
const OVERLAY_HEIGHT: u16 = 10;

/// Draws a state snapshot and remembers where its buttons ended up
pub struct Renderer {
    button_areas: Vec<(Button, Rect)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            button_areas: Vec::new(),
        }
    }

    /// The button drawn at a terminal cell in the last frame
    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        self.button_areas
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| *button)
    }

    pub fn render(&mut self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        self.button_areas.clear();

        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Buttons
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        // Two characters per cell plus the border
        let side = state.grid_size as u16;
        let grid_area = centered(chunks[1], side * 2 + 2, side + 2);
        frame.render_widget(self.render_grid(state), grid_area);

        if !state.is_active() {
            self.render_overlay(frame, grid_area, state);
        }

        self.render_controls(frame, chunks[2], state);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.grid_size);

        for y in 0..state.grid_size {
            let mut spans = Vec::with_capacity(state.grid_size);

            for x in 0..state.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_overlay(&mut self, frame: &mut Frame, grid_area: Rect, state: &GameState) {
        let area = centered(grid_area, OVERLAY_WIDTH, OVERLAY_HEIGHT);

        let (title, color) = if state.game_over {
            ("GAME OVER", Color::Red)
        } else if state.is_started {
            ("PAUSED", Color::Yellow)
        } else {
            ("SNAKE", Color::Green)
        };

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if state.game_over {
            text.push(Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.score.to_string(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.high_score.to_string(), Style::default().fg(Color::White)),
            ]));
        } else if !state.is_started {
            text.push(Line::from(Span::styled(
                "Swipe, arrows or WASD to steer",
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            area,
        );

        let label = format!("[ {} ]", Button::Primary.label(state));
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if inner.height < 2 {
            return;
        }
        let button_area = centered(
            Rect {
                y: inner.y + inner.height - 2,
                height: 1,
                ..inner
            },
            label.chars().count() as u16,
            1,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )),
            button_area,
        );
        self.button_areas.push((Button::Primary, button_area));
    }

    fn render_controls(&mut self, frame: &mut Frame, area: Rect, state: &GameState) {
        let count = Button::CONTROLS.len() as u32;
        let cells = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints(Button::CONTROLS.iter().map(|_| Constraint::Ratio(1, count)))
            .split(area);

        for (button, cell) in Button::CONTROLS.iter().zip(cells.iter()) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    button.label(state),
                    Style::default().fg(Color::Cyan),
                ))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                *cell,
            );
            self.button_areas.push((*button, *cell));
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
