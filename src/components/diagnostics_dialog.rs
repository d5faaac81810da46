//! Diagnostics overlay component
//!
//! Lists the check failures swallowed during this session. Failures never
//! interrupt the user; this dialog is the only place they are visible.

use crate::action::Action;
use crate::component::Component;
use crate::model::diagnostics::DiagnosticEntry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Diagnostics overlay listing swallowed check failures
#[derive(Default)]
pub struct DiagnosticsDialog {
    pub scroll_offset: usize,
}

impl Component for DiagnosticsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_entries(frame, area, &[])
    }
}

impl DiagnosticsDialog {
    /// Draw the overlay for the session's diagnostic entries
    pub fn draw_with_entries(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[DiagnosticEntry],
    ) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = if entries.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No failures recorded this session.",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else {
            entries
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", entry.formatted_time()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            entry.message.clone(),
                            Style::default().fg(Color::Red),
                        ),
                    ])
                })
                .collect()
        };

        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Diagnostics ({}) ", entries.len()))
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);
        Ok(())
    }
}
