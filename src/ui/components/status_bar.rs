//! Status bar component
//!
//! Displays inventory status, the latest error and help hints.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::state::{AppState, LifecyclePhase},
    error::AppResult,
    ui::{components::Component, theme::Theme},
};

/// Status bar at the bottom of the screen
pub struct StatusBarComponent {}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {}
    }

    fn get_status_message(&self, state: &AppState) -> String {
        match state.app_state.lifecycle {
            LifecyclePhase::Starting => "Starting...".to_string(),
            LifecyclePhase::Running => {
                let inventory = state.inventory();
                let loaded_at = state
                    .inventory_state
                    .loaded_at
                    .map(|at| format!(" @{}", at.format("%H:%M:%S")))
                    .unwrap_or_default();
                if !state.inventory_state.loaded {
                    "Loading...".to_string()
                } else if inventory.is_empty() {
                    format!("No stones{}", loaded_at)
                } else {
                    format!(
                        "Stone {}/{}{}",
                        state.selected_index() + 1,
                        inventory.len(),
                        loaded_at
                    )
                }
            }
            LifecyclePhase::Quitting => "Shutting down...".to_string(),
        }
    }

    fn get_help_text(&self, state: &AppState) -> &'static str {
        if state.is_background_scroll_locked() {
            "Esc / [x] / click outside: Close"
        } else {
            // Esc also quits here, so a second Esc after closing the modal exits
            "↑↓ Navigate | Enter Details | q/Esc Quit"
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBarComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let sections = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24),
                Constraint::Min(10),
                Constraint::Length(42),
            ])
            .split(area);

        let status = Paragraph::new(self.get_status_message(state)).style(theme.text_style());
        frame.render_widget(status, sections[0]);

        if let Some(error) = state.latest_error() {
            let error_text = Paragraph::new(format!(
                "{} {}",
                error.timestamp.format("%H:%M:%S"),
                error.message
            ))
            .style(theme.error_style());
            frame.render_widget(error_text, sections[1]);
        }

        let help = Paragraph::new(self.get_help_text(state))
            .style(theme.muted_style())
            .alignment(Alignment::Right);
        frame.render_widget(help, sections[2]);
    }

    fn handle_key_event(&mut self, _key: KeyEvent, _state: &mut AppState) -> AppResult<()> {
        Ok(())
    }
}
