//! Screen shown until the server starts the game

use super::common::{create_instructions_paragraph, create_panel_block, shortcuts};
use crate::constants::{LOBBY_WAITING, TITLE_LOBBY};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub struct LobbyComponent {
    server_url: String,
}

impl LobbyComponent {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

impl Component for LobbyComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(60, 40, rect);
        f.render_widget(Clear, area);

        let block = create_panel_block(TITLE_LOBBY, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let text = format!("{}\n\nServer: {}", LOBBY_WAITING, self.server_url);
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, chunks[0]);

        let instructions = create_instructions_paragraph(&[shortcuts::LOGS, shortcuts::SEPARATOR, shortcuts::QUIT]);
        f.render_widget(instructions, chunks[1]);
    }
}
