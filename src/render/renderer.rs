use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::{CellCanvas, Rgb};
use super::scene::draw_scene;
use crate::game::{GameConfig, GameState};
use crate::metrics::{SessionStats, cause_label};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        config: &GameConfig,
        stats: &SessionStats,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let (width_px, height_px) = config.logical_size();
        let mut canvas = CellCanvas::new(width_px, height_px, config.tile_size);
        draw_scene(state, config, &mut canvas);

        let header = self.render_stats(&canvas, stats);
        frame.render_widget(header, chunks[0]);

        let grid = self.render_grid(&canvas, state.game_over);
        frame.render_widget(grid, self.center(chunks[1], config));

        let footer = if state.game_over {
            self.render_game_over()
        } else {
            self.render_controls()
        };
        frame.render_widget(footer, chunks[2]);
    }

    /// Area of exactly the board's size (plus border), centered in `area`
    fn center(&self, area: Rect, config: &GameConfig) -> Rect {
        let width = (config.grid_width as u16).saturating_mul(2).saturating_add(2);
        let height = (config.grid_height as u16).saturating_add(2);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width)])
            .flex(Flex::Center)
            .split(area)[0];

        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(height)])
            .flex(Flex::Center)
            .split(horizontal)[0]
    }

    fn render_grid(&self, canvas: &CellCanvas, game_over: bool) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(canvas.height());

        for y in 0..canvas.height() {
            let spans: Vec<Span> = (0..canvas.width())
                .map(|x| match canvas.cell(x, y) {
                    Some(rgb) => Span::styled("██", Style::default().fg(to_color(rgb))),
                    None => Span::styled("  ", Style::default()),
                })
                .collect();

            lines.push(Line::from(spans));
        }

        let border = if game_over { Color::Red } else { Color::White };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, canvas: &CellCanvas, stats: &SessionStats) -> Paragraph<'_> {
        let mut spans: Vec<Span> = canvas
            .overlay()
            .iter()
            .map(|text| {
                Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        spans.extend([
            Span::raw("   "),
            Span::styled("Rounds: ", label),
            Span::styled(stats.rounds_played().to_string(), value),
        ]);

        if let Some(best) = stats.best_round() {
            spans.extend([
                Span::raw("   "),
                Span::styled("Longest: ", label),
                Span::styled(best.length.to_string(), value),
            ]);
        }

        if let Some(last) = stats.last_round() {
            spans.extend([
                Span::raw("   "),
                Span::styled("Last: ", label),
                Span::styled(cause_label(last.cause), value),
            ]);
        }

        spans.extend([
            Span::raw("   "),
            Span::styled("Time: ", label),
            Span::styled(stats.round_clock(), value),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to turn | "),
            Span::styled("WASD ↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" to face | "),
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

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
