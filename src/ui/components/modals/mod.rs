//! Modal components for user interaction
//!
//! Modals are drawn over the whole screen and capture input while open.

pub mod stone_details;

pub use stone_details::{
    DismissBindings, ModalRegions, ModalVisibility, StoneDetailsModal, StoneDetailsView,
};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::ui::theme::Theme;

/// Trait for modal components
pub trait Modal {
    /// Render the modal over `area`
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Handle key events
    fn handle_key_event(&mut self, key: KeyEvent) -> ModalResult;

    /// Handle mouse events
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ModalResult;

    /// Check if modal is open
    fn is_open(&self) -> bool;

    /// Close the modal
    fn close(&mut self);
}

/// What closed a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// Click on the backdrop outside the popup
    Backdrop,
    /// Escape key
    Escape,
    /// The `[x]` button in the title bar
    CloseButton,
    /// The footer action button
    ActionButton,
}

/// Result from modal interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    /// Modal is closed, the event is not for it
    None,
    /// Modal consumed the event and stays open
    Handled,
    /// Modal consumed the event and closed
    Dismissed(DismissTrigger),
}

impl ModalResult {
    /// Whether the event should stop here instead of reaching the screen below
    pub fn is_consumed(&self) -> bool {
        !matches!(self, ModalResult::None)
    }
}

/// Calculate a centered rectangle covering a percentage of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Whether a terminal cell lies inside `rect`
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
