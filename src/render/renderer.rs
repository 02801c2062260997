use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::CellBuffer;
use crate::game::GameState;
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        canvas: &CellBuffer,
        state: &GameState,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Render the field, or a notice if it cannot fit
        match board_area(chunks[1], canvas) {
            Some(board) => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake ");
                let inner = block.inner(board);
                frame.render_widget(block, board);
                frame.render_widget(canvas, inner);
            }
            None => {
                let notice = self.render_too_small(canvas);
                frame.render_widget(notice, chunks[1]);
            }
        }

        // Render footer with controls
        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_length.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.rounds_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_too_small(&self, canvas: &CellBuffer) -> Paragraph<'_> {
        let (width, height) = canvas.size();
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                format!("The field needs {}x{} cells", width + 2, height + 2),
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
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

/// Centered rectangle holding the field plus its border, if it fits
fn board_area(area: Rect, canvas: &CellBuffer) -> Option<Rect> {
    let (width, height) = canvas.size();
    let (width, height) = (width.checked_add(2)?, height.checked_add(2)?);
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_board_is_centered() {
        let canvas = CellBuffer::new(&GameConfig::small()); // 10x10 cells
        let area = Rect::new(0, 3, 40, 20);

        let board = board_area(area, &canvas).unwrap();
        assert_eq!(board, Rect::new(9, 7, 22, 12));
    }

    #[test]
    fn test_board_too_large() {
        let canvas = CellBuffer::new(&GameConfig::default()); // 32x24 cells
        assert_eq!(board_area(Rect::new(0, 0, 60, 20), &canvas), None);
    }
}
