//! Check form component
//!
//! Owns the two text inputs (prompt and brand) and the focus state.
//! Editing is handled locally; Enter emits a Submit action. There is no
//! client-side validation: empty fields are submitted as-is.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which input currently receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Prompt,
    Brand,
}

impl FormField {
    fn next(&self) -> FormField {
        match self {
            FormField::Prompt => FormField::Brand,
            FormField::Brand => FormField::Prompt,
        }
    }
}

/// The prompt/brand input form
#[derive(Default)]
pub struct FormComponent {
    pub prompt: String,
    pub brand: String,
    pub focus: FormField,
}

impl FormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Prompt => &mut self.prompt,
            FormField::Brand => &mut self.brand,
        }
    }
}

impl Component for FormComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Control chords first - plain characters go into the focused field
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('c') => Some(Action::ForceQuit),
                KeyCode::Char('e') => Some(Action::ExportCsv),
                KeyCode::Char('h') => Some(Action::OpenHelp),
                KeyCode::Char('d') => Some(Action::OpenDiagnostics),
                KeyCode::Char('j') => Some(Action::ScrollDown),
                KeyCode::Char('k') => Some(Action::ScrollUp),
                KeyCode::Char('u') => {
                    self.focused_field_mut().clear();
                    None
                }
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.focused_field_mut().push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(3)])
            .split(area);

        draw_input(
            frame,
            chunks[0],
            " Prompt ",
            &self.prompt,
            self.focus == FormField::Prompt,
        );
        draw_input(
            frame,
            chunks[1],
            " Brand ",
            &self.brand,
            self.focus == FormField::Brand,
        );

        Ok(())
    }
}

fn draw_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if focused {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}_", value),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(value.to_string(), Style::default().fg(Color::Gray)),
        ])
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = FormComponent::new();
        assert_eq!(form.focus, FormField::Prompt);

        form.handle_key_event(key(KeyCode::Char('h'))).unwrap();
        form.handle_key_event(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(form.prompt, "hi");
        assert_eq!(form.brand, "");

        form.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(form.focus, FormField::Brand);

        form.handle_key_event(key(KeyCode::Char('A'))).unwrap();
        assert_eq!(form.brand, "A");

        form.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(form.brand, "");
    }

    #[test]
    fn test_enter_submits_even_when_empty() {
        // No client-side validation: empty fields are forwarded as-is
        let mut form = FormComponent::new();
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::Submit));
    }

    #[test]
    fn test_control_chords() {
        let mut form = FormComponent::new();
        assert_eq!(
            form.handle_key_event(ctrl('e')).unwrap(),
            Some(Action::ExportCsv)
        );
        assert_eq!(
            form.handle_key_event(ctrl('h')).unwrap(),
            Some(Action::OpenHelp)
        );
        assert_eq!(
            form.handle_key_event(ctrl('d')).unwrap(),
            Some(Action::OpenDiagnostics)
        );
        assert_eq!(
            form.handle_key_event(ctrl('c')).unwrap(),
            Some(Action::ForceQuit)
        );
        // Ctrl+U clears the focused field instead of typing 'u'
        form.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        form.handle_key_event(ctrl('u')).unwrap();
        assert_eq!(form.prompt, "");
    }

    #[test]
    fn test_escape_opens_quit_dialog() {
        let mut form = FormComponent::new();
        let action = form.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::OpenQuitDialog));
    }
}
