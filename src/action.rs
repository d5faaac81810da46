//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; drains completed background checks
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Brand Checking
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the current prompt/brand pair to the check endpoint
    Submit,
    /// Export the results table to a CSV file
    ExportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // Results Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll results table up one line
    ScrollUp,
    /// Scroll results table down one line
    ScrollDown,
    /// Scroll results table up one page
    PageUp,
    /// Scroll results table down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Open the diagnostics overlay listing swallowed check failures
    OpenDiagnostics,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Submit => write!(f, "Submit"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenDiagnostics => write!(f, "OpenDiagnostics"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
