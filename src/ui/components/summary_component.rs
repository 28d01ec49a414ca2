//! Final screen showing the game result

use super::common::{create_instructions_paragraph, create_panel_block, shortcuts};
use crate::constants::TITLE_GAME_OVER;
use crate::protocol::GameSummary;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub struct SummaryComponent {
    summary: Option<GameSummary>,
}

impl SummaryComponent {
    /// Build from the payload handed over by the game screen. An unreadable
    /// payload still shows the screen, without numbers.
    pub fn from_payload(payload: &str) -> Self {
        let summary = match GameSummary::from_payload(payload) {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::warn!("Summary: unreadable payload: {}", e);
                None
            }
        };
        Self { summary }
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }
}

impl Component for SummaryComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(50, 40, rect);
        f.render_widget(Clear, area);

        let block = create_panel_block(TITLE_GAME_OVER, Color::Green);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let lines = match &self.summary {
            Some(summary) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("Score: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        summary.score.to_string(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Level: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        summary.level.to_string(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
            None => vec![Line::from(""), Line::from("The game has ended.")],
        };

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);

        let instructions = create_instructions_paragraph(&[shortcuts::ENTER_QUIT, shortcuts::SEPARATOR, shortcuts::QUIT]);
        f.render_widget(instructions, chunks[1]);
    }
}
