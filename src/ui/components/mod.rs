//! UI Components module
//!
//! Contains the reusable UI components for the TUI interface.

pub mod inventory_list;
pub mod modals;
pub mod status_bar;

pub use inventory_list::InventoryListComponent;
pub use modals::*;
pub use status_bar::StatusBarComponent;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::{app::state::AppState, error::AppResult, ui::theme::Theme};

/// Trait for UI components that can render and handle events
pub trait Component {
    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme);

    /// Handle key events
    fn handle_key_event(&mut self, key: KeyEvent, state: &mut AppState) -> AppResult<()>;
}
