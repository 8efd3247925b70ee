//! User Interface module
//!
//! Terminal User Interface built with ratatui: a header, the inventory list,
//! a status bar and the stone details modal drawn over everything.

pub mod components;
pub mod theme;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use crate::{
    app::state::AppState,
    config::{ModalConfig, UIConfig},
    error::AppResult,
    pedra::StoneDisplayRequest,
};
use components::*;
use theme::Theme;

/// Main UI renderer
pub struct UI {
    /// Current theme
    theme: Theme,
    /// Component instances
    components: UIComponents,
}

/// UI component instances
struct UIComponents {
    inventory: InventoryListComponent,
    status_bar: StatusBarComponent,
    stone_details: StoneDetailsModal,
}

impl UI {
    /// Create a new UI instance
    pub fn new(config: &UIConfig, modal_config: &ModalConfig) -> Self {
        debug!("Initializing UI with theme: {}", config.theme);

        Self {
            theme: Theme::load(&config.theme),
            components: UIComponents {
                inventory: InventoryListComponent::new(),
                status_bar: StatusBarComponent::new(),
                stone_details: StoneDetailsModal::new(modal_config),
            },
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Inventory
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.render_header(frame, chunks[0]);
        self.components
            .inventory
            .render(frame, chunks[1], state, &self.theme);
        self.components
            .status_bar
            .render(frame, chunks[2], state, &self.theme);

        // Modal goes last so it covers the whole screen
        self.components
            .stone_details
            .render(frame, size, &self.theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Pedra Viewer", self.theme.title_style()),
            Span::styled(
                format!("  v{}", env!("CARGO_PKG_VERSION")),
                self.theme.muted_style(),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style()),
        );
        frame.render_widget(header, area);
    }

    /// Whether the details modal is on screen
    pub fn is_modal_open(&self) -> bool {
        self.components.stone_details.is_open()
    }

    /// The details modal, for inspection
    pub fn stone_details(&self) -> &StoneDetailsModal {
        &self.components.stone_details
    }

    /// Open the details modal for `stone` and freeze the list behind it
    pub fn show_stone(&mut self, stone: StoneDisplayRequest, state: &mut AppState) {
        self.components.stone_details.show(stone);
        state.lock_background_scroll();
    }

    /// Close the details modal and release the list
    pub fn hide_stone(&mut self, state: &mut AppState) {
        self.components.stone_details.hide();
        state.unlock_background_scroll();
    }

    fn open_selected(&mut self, state: &mut AppState) {
        if let Some(stone) = state.selected_stone().cloned() {
            self.show_stone(stone, state);
        }
    }

    fn apply_modal_result(&mut self, result: ModalResult, state: &mut AppState) {
        if let ModalResult::Dismissed(trigger) = result {
            debug!("Details modal closed via {:?}", trigger);
            state.unlock_background_scroll();
        }
    }

    /// Handle key events
    pub fn handle_key_event(&mut self, key: KeyEvent, state: &mut AppState) -> AppResult<()> {
        let result = self.components.stone_details.handle_key_event(key);
        if result.is_consumed() {
            self.apply_modal_result(result, state);
            return Ok(());
        }

        match key.code {
            KeyCode::Enter => self.open_selected(state),
            _ => self.components.inventory.handle_key_event(key, state)?,
        }
        Ok(())
    }

    /// Handle mouse events
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, state: &mut AppState) -> AppResult<()> {
        let result = self.components.stone_details.handle_mouse_event(mouse);
        if result.is_consumed() {
            self.apply_modal_result(result, state);
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                state.select_next();
            }
            MouseEventKind::ScrollUp => {
                state.select_previous();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self
                    .components
                    .inventory
                    .row_at(mouse.column, mouse.row, state)
                {
                    state.select(index);
                    self.open_selected(state);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("UI resize to {}x{}", width, height);
    }
}
