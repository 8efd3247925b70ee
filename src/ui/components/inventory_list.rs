//! Inventory list component
//!
//! Scrollable list of stones, one row per stone with its tier and
//! enhancement badges. Remembers where it was drawn so mouse clicks can be
//! mapped back to rows.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::{
    app::state::AppState,
    error::AppResult,
    pedra::{enhancement_label, tier_label},
    ui::{
        components::{modals::rect_contains, Component},
        theme::Theme,
    },
};

/// Inventory list on the main screen
pub struct InventoryListComponent {
    list_state: ListState,
    /// Rows area (inside the border) from the last frame
    rows_area: Option<Rect>,
}

impl InventoryListComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            rows_area: None,
        }
    }

    /// Index of the stone drawn at the given cell, if any
    pub fn row_at(&self, column: u16, row: u16, state: &AppState) -> Option<usize> {
        let area = self.rows_area?;
        if !rect_contains(area, column, row) {
            return None;
        }
        let index = self.list_state.offset() + (row - area.y) as usize;
        (index < state.inventory().len()).then_some(index)
    }

    fn list_item<'a>(name: &'a str, status_count: usize, theme: &Theme) -> ListItem<'a> {
        let mut spans = vec![Span::styled(
            format!("{:<8}", tier_label(name)),
            theme.tier_badge_style(),
        )];
        spans.push(Span::raw(" "));
        match enhancement_label(name) {
            Some(enhancement) => spans.push(Span::styled(
                format!("{:<4}", enhancement),
                theme.enhancement_badge_style(),
            )),
            None => spans.push(Span::raw("    ")),
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(name, theme.text_style()));
        spans.push(Span::styled(
            format!("  ({} status)", status_count),
            theme.muted_style(),
        ));

        ListItem::new(Line::from(spans))
    }
}

impl Default for InventoryListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InventoryListComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Stones ({}) ", state.inventory().len()))
            .border_style(theme.border_style());
        self.rows_area = Some(block.inner(area));

        if state.inventory().is_empty() {
            let message = if state.inventory_state.loaded {
                "No stones in inventory"
            } else {
                "Loading inventory..."
            };
            let paragraph = Paragraph::new(message)
                .style(theme.muted_style())
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = state
            .inventory()
            .iter()
            .map(|stone| Self::list_item(&stone.name, stone.status_count(), theme))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.highlight_style())
            .highlight_symbol("> ");

        self.list_state.select(Some(state.selected_index()));
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key_event(&mut self, key: KeyEvent, state: &mut AppState) -> AppResult<()> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                state.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.select_previous();
            }
            KeyCode::PageDown => {
                state.page_down();
            }
            KeyCode::PageUp => {
                state.page_up();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                state.select_first();
            }
            KeyCode::End | KeyCode::Char('G') => {
                state.select_last();
            }
            _ => {}
        }
        Ok(())
    }
}
