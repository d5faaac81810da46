//! Results table component
//!
//! Read-only view over the in-memory results list. Renders an aligned
//! four-column table (Prompt, Brand, Mentioned, Position) with a scrollbar.

use crate::action::Action;
use crate::component::Component;
use crate::model::check::{BrandCheckResult, Mentioned};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a free-text column is allowed to grow
const MAX_TEXT_COL_WIDTH: usize = 50;

/// Results table view
#[derive(Default)]
pub struct ResultsComponent {
    /// Scroll offset, clamped at draw time
    scroll: usize,
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the table for the current results list
    pub fn draw_with_results(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        results: &[BrandCheckResult],
    ) -> Result<()> {
        let content = build_table_lines(results);
        let total = content.len();
        let visible_height = area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Results ({}) ", results.len()))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

impl Component for ResultsComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_results(frame, area, &[])
    }
}

/// Style for the Mentioned column
fn mentioned_style(mentioned: Mentioned) -> Style {
    match mentioned {
        Mentioned::Yes => Style::default().fg(Color::Green),
        Mentioned::No => Style::default().fg(Color::Red),
        Mentioned::Unknown => Style::default().fg(Color::DarkGray),
    }
}

/// Build table lines from the results list
pub fn build_table_lines(results: &[BrandCheckResult]) -> Vec<Line<'static>> {
    if results.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                "No results yet. Fill in the form and press Enter to run a check.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
    }

    let headers = ["Prompt", "Brand", "Mentioned", "Position"];

    // Calculate column widths from headers and cell contents
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for result in results {
        col_widths[0] = col_widths[0].max(result.prompt.width());
        col_widths[1] = col_widths[1].max(result.brand.width());
        col_widths[2] = col_widths[2].max(result.mentioned.label().width());
        col_widths[3] = col_widths[3].max(result.position_label().width());
    }
    col_widths[0] = col_widths[0].min(MAX_TEXT_COL_WIDTH);
    col_widths[1] = col_widths[1].min(MAX_TEXT_COL_WIDTH);

    let mut lines = Vec::with_capacity(results.len() + 2);

    // Header row
    let header_spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, h)| {
            vec![
                Span::styled(
                    fit_cell(h, col_widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    // Separator
    let separator: String = col_widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    // Data rows, in append (completion) order
    for result in results {
        lines.push(Line::from(vec![
            Span::styled(
                fit_cell(&result.prompt, col_widths[0]),
                Style::default().fg(Color::White),
            ),
            Span::raw(" │ "),
            Span::styled(
                fit_cell(&result.brand, col_widths[1]),
                Style::default().fg(Color::White),
            ),
            Span::raw(" │ "),
            Span::styled(
                fit_cell(result.mentioned.label(), col_widths[2]),
                mentioned_style(result.mentioned),
            ),
            Span::raw(" │ "),
            Span::styled(
                fit_cell(&result.position_label(), col_widths[3]),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    lines
}

/// Pad or truncate a cell to the given display width
fn fit_cell(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut cell = text.to_string();
        cell.push_str(&" ".repeat(width - text_width));
        return cell;
    }

    // Truncate by display width, leaving room for the ellipsis
    let budget = width.saturating_sub(3);
    let mut cell = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        cell.push(c);
        used += w;
    }
    cell.push_str("...");

    let cell_width = used + 3;
    if cell_width < width {
        cell.push_str(&" ".repeat(width - cell_width));
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(prompt: &str, mentioned: Mentioned, position: Option<i64>) -> BrandCheckResult {
        BrandCheckResult {
            prompt: prompt.to_string(),
            brand: "Acme".to_string(),
            mentioned,
            position,
        }
    }

    #[test]
    fn test_table_has_one_line_per_result_plus_header() {
        let results = vec![
            result("Best laptops?", Mentioned::Yes, Some(3)),
            result("Best phones?", Mentioned::No, Some(0)),
        ];
        let lines = build_table_lines(&results);
        // header + separator + 2 rows
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_results_show_hint() {
        let lines = build_table_lines(&[]);
        assert!(lines.len() >= 2);
    }

    #[test]
    fn test_fit_cell_pads_short_text() {
        assert_eq!(fit_cell("abc", 5), "abc  ");
    }

    #[test]
    fn test_fit_cell_truncates_long_text() {
        let cell = fit_cell("abcdefghij", 6);
        assert_eq!(cell, "abc...");
        assert_eq!(cell.width(), 6);
    }

    #[test]
    fn test_fit_cell_handles_multibyte_text() {
        // Must not panic slicing inside a multibyte character
        let cell = fit_cell("日本語のテキスト", 6);
        assert!(cell.width() <= 6);
    }
}
