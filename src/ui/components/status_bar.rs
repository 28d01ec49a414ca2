//! Status bar component

use crate::constants::{STATUS_CONNECTED, STATUS_CONNECTING, STATUS_DISCONNECTED, STATUS_SHORTCUTS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: ConnectionStatus) {
        let (status_text, status_color) = match status {
            ConnectionStatus::Connecting => (STATUS_CONNECTING, Color::Yellow),
            ConnectionStatus::Connected => (STATUS_CONNECTED, Color::Green),
            ConnectionStatus::Disconnected => (STATUS_DISCONNECTED, Color::Red),
        };

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(status_color)),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(STATUS_SHORTCUTS, Style::default().fg(Color::Gray)),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
