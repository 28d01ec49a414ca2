//! Renders one lane of generated controls

use super::common::create_panel_block;
use crate::ui::generator::{ControlPanel, Lane};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub struct LaneView;

impl LaneView {
    pub fn render(f: &mut Frame, area: Rect, panel: &ControlPanel, lane: Lane, title: &str, focused: Option<u32>) {
        let items: Vec<ListItem> = panel
            .lane(lane)
            .map(|control| {
                let is_focused = focused == Some(control.id());
                let marker = if is_focused { "▶ " } else { "  " };

                let mut spans = vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("[ {} ]", control.label()),
                        if is_focused {
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ];

                if control.is_switch() {
                    let (text, color) = if control.is_on() {
                        (" ON", Color::Green)
                    } else {
                        (" OFF", Color::DarkGray)
                    };
                    spans.push(Span::styled(text, Style::default().fg(color)));
                }

                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(create_panel_block(title, Color::Cyan));
        f.render_widget(list, area);
    }
}
