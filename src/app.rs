//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. App owns
//! the shared state: the append-only results list, the session diagnostics
//! buffer, and the background check runner.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, DiagnosticsDialog, FormComponent, HelpDialog, QuitDialog,
    ResultsComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{BrandCheckResult, DiagnosticEntry};
use crate::services::{export_results, CheckMessage, CheckRunner};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;

/// Main application state - coordinates between components
pub struct App {
    /// Session results, append-only, in completion order
    pub results: Vec<BrandCheckResult>,

    /// Swallowed check failures for this session
    pub diagnostics: Vec<DiagnosticEntry>,

    /// Background check runner
    pub runner: CheckRunner,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current config (endpoint, export path)
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: FormComponent,
    pub results_view: ResultsComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub diagnostics_dialog: DiagnosticsDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();

        App {
            results: Vec::new(),
            diagnostics: Vec::new(),
            runner: CheckRunner::new(),
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            config,
            form: FormComponent::new(),
            results_view: ResultsComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            diagnostics_dialog: DiagnosticsDialog::default(),
        }
    }

    /// Whether any check is currently in flight
    pub fn is_busy(&self) -> bool {
        self.runner.is_busy()
    }

    /// Export is disabled while the table is empty or a check is running
    pub fn can_export(&self) -> bool {
        !self.results.is_empty() && !self.runner.is_busy()
    }

    /// Apply one drained check outcome to the shared state
    ///
    /// A completed check appends exactly one row; a failed check appends
    /// nothing to the results and is recorded in the diagnostics buffer.
    fn apply_check_message(&mut self, message: CheckMessage) {
        match message {
            CheckMessage::Completed(result) => {
                self.results.push(result);
            }
            CheckMessage::Failed(err) => {
                self.diagnostics
                    .push(DiagnosticEntry::new(format!("check failed: {}", err)));
            }
        }
    }

    /// Start one background check with the current form contents
    fn submit_check(&mut self) {
        self.runner.spawn(
            self.config.endpoint.clone(),
            self.form.prompt.clone(),
            self.form.brand.clone(),
        );
        self.status_message = None;
    }

    /// Write the results table to the configured CSV path
    fn export_csv(&mut self) {
        if !self.can_export() {
            return;
        }

        match export_results(&self.results, Path::new(&self.config.export_path)) {
            Ok(rows) => {
                self.status_message =
                    Some(format!("Exported {} rows to {}", rows, self.config.export_path));
            }
            Err(e) => {
                self.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            Some(Modal::Diagnostics) => self.diagnostics_dialog.handle_key_event(key),
            None => self.form.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                for message in self.runner.poll() {
                    self.apply_check_message(message);
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Brand Checking
            // ─────────────────────────────────────────────────────────────────
            Action::Submit => {
                self.submit_check();
            }
            Action::ExportCsv => {
                self.export_csv();
            }

            // ─────────────────────────────────────────────────────────────────
            // Results Scrolling (delegate to ResultsComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.results_view.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                if self.modals.top() == Some(&Modal::Help) {
                    self.modals.pop();
                } else {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::OpenDiagnostics => {
                if self.modals.top() == Some(&Modal::Diagnostics) {
                    self.modals.pop();
                } else {
                    self.diagnostics_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Diagnostics);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let has_status = self.status_message.is_some() || self.is_busy();
        let layout = calculate_main_layout(area, has_status);

        self.form.draw(frame, layout.form)?;
        self.results_view
            .draw_with_results(frame, layout.results, &self.results)?;

        if let Some(status_area) = layout.status {
            self.draw_status_line(frame, status_area);
        }
        self.draw_help_bar(frame, layout.help);

        // Draw modal overlay if active
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            Some(Modal::Diagnostics) => {
                self.diagnostics_dialog
                    .draw_with_entries(frame, area, &self.diagnostics)?;
            }
            None => {}
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn draw_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = if self.is_busy() {
            let n = self.runner.in_flight();
            Line::from(Span::styled(
                format!(
                    " ⏳ {} check{} running...",
                    n,
                    if n == 1 { "" } else { "s" }
                ),
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(ref message) = self.status_message {
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };

        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", key_style),
            Span::raw("Run check  "),
            Span::styled(" Ctrl+E ", key_style),
            Span::raw("Export CSV  "),
            Span::styled(" Ctrl+D ", key_style),
            Span::raw("Diagnostics  "),
            Span::styled(" Ctrl+H ", key_style),
            Span::raw("Help  "),
            Span::styled(" Esc ", key_style),
            Span::raw("Quit"),
        ]))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::check::Mentioned;

    fn sample_result() -> BrandCheckResult {
        BrandCheckResult {
            prompt: "Best laptops?".to_string(),
            brand: "Acme".to_string(),
            mentioned: Mentioned::Yes,
            position: Some(3),
        }
    }

    #[test]
    fn test_completed_check_appends_exactly_one_row() {
        let mut app = App::new();
        assert!(app.results.is_empty());

        app.apply_check_message(CheckMessage::Completed(sample_result()));
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].mentioned, Mentioned::Yes);
        assert_eq!(app.results[0].position, Some(3));
    }

    #[test]
    fn test_failed_check_appends_no_row() {
        let mut app = App::new();
        app.apply_check_message(CheckMessage::Failed("connection refused".to_string()));

        assert!(app.results.is_empty());
        assert_eq!(app.diagnostics.len(), 1);
        assert!(app.diagnostics[0].message.contains("connection refused"));
    }

    #[test]
    fn test_export_requires_results() {
        let mut app = App::new();
        assert!(!app.can_export());

        app.results.push(sample_result());
        assert!(app.can_export());
    }

    #[test]
    fn test_export_is_noop_when_empty() {
        let mut app = App::new();
        let path = std::env::temp_dir().join("brandcheck-tui-test-noop.csv");
        let _ = std::fs::remove_file(&path);
        app.config.export_path = path.to_string_lossy().to_string();

        app.update(Action::ExportCsv).unwrap();

        assert!(!path.exists());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_export_is_noop_while_check_in_flight() {
        // Port 1 is never listening; the spawn raises the in-flight count
        // synchronously, so the gate holds regardless of thread timing
        let mut app = App::new();
        let path = std::env::temp_dir().join("brandcheck-tui-test-busy.csv");
        let _ = std::fs::remove_file(&path);
        app.config.export_path = path.to_string_lossy().to_string();
        app.results.push(sample_result());

        app.runner.spawn(
            "http://127.0.0.1:1/api/check-brand-list".to_string(),
            "prompt".to_string(),
            "brand".to_string(),
        );
        assert!(app.is_busy());
        assert!(!app.can_export());

        app.update(Action::ExportCsv).unwrap();

        assert!(!path.exists());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_export_writes_file_and_reports() {
        let mut app = App::new();
        let path = std::env::temp_dir().join("brandcheck-tui-test-export.csv");
        app.config.export_path = path.to_string_lossy().to_string();
        app.results.push(sample_result());

        app.update(Action::ExportCsv).unwrap();

        let contents = std::fs::read_to_string(&path).expect("Export file not written");
        assert!(contents.starts_with("Prompt,Brand,Mentioned,Position"));
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("Exported 1 rows")));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_help_modal_toggles() {
        let mut app = App::new();
        assert!(app.modals.is_empty());

        app.update(Action::OpenHelp).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        app.update(Action::OpenHelp).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_flow() {
        let mut app = App::new();
        app.update(Action::OpenQuitDialog).unwrap();
        assert!(matches!(app.modals.top(), Some(Modal::QuitConfirm)));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
