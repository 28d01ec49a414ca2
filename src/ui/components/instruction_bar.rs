//! Instruction text, countdown and level indicator

use super::common::create_panel_block;
use crate::constants::INSTRUCTION_PLACEHOLDER;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct InstructionBar;

impl InstructionBar {
    pub fn render(
        f: &mut Frame,
        area: Rect,
        instruction: Option<&str>,
        remaining_seconds: Option<u32>,
        level: u32,
        shake_armed: bool,
    ) {
        let instruction_line = match instruction {
            Some(text) => Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(INSTRUCTION_PLACEHOLDER, Style::default().fg(Color::DarkGray))),
        };

        let mut info = Vec::new();
        if let Some(remaining) = remaining_seconds {
            let color = if remaining <= 3 { Color::Red } else { Color::Yellow };
            info.push(Span::styled(format!("⏱ {}s", remaining), Style::default().fg(color)));
        }
        if shake_armed {
            if !info.is_empty() {
                info.push(Span::raw("  "));
            }
            info.push(Span::styled("📳 shake!", Style::default().fg(Color::Magenta)));
        }

        let title = if level > 0 {
            format!(" Level {} ", level)
        } else {
            " Instructions ".to_string()
        };

        let paragraph = Paragraph::new(vec![instruction_line, Line::from(info)])
            .alignment(Alignment::Center)
            .block(create_panel_block(&title, Color::Blue));

        f.render_widget(paragraph, area);
    }
}
