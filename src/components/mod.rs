//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod diagnostics_dialog;
pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod results;

pub use diagnostics_dialog::DiagnosticsDialog;
pub use form::FormComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup, MainLayout};
pub use quit_dialog::QuitDialog;
pub use results::ResultsComponent;
