//! Scrollable overlay showing recent log lines

use crate::constants::TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    scroll_offset: usize,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            scroll_offset: 0,
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn scroll_down(&mut self) {
        let max = self.logger.get_logs().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

impl Component for LogsPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') => Action::ToggleLogs,
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(TITLE_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, area);

        let inner = area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = self.logger.get_logs();
        if logs.is_empty() {
            let empty = Paragraph::new("No logs yet").style(Style::default().fg(Color::Gray));
            f.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = logs
            .iter()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .map(|log| {
                let style = if log.contains("ERROR") {
                    Style::default().fg(Color::Red)
                } else if log.contains("WARN") {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };

                // "[timestamp] message"
                match log.find("] ") {
                    Some(end) => ListItem::new(Line::from(vec![
                        Span::styled(log[..end + 2].to_string(), Style::default().fg(Color::DarkGray)),
                        Span::styled(log[end + 2..].to_string(), style),
                    ])),
                    None => ListItem::new(Line::from(Span::styled(log.clone(), style))),
                }
            })
            .collect();

        f.render_widget(List::new(items), inner);
    }
}
