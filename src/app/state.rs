//! Application state management
//!
//! Centralized state for the inventory screen. The details modal owns its
//! own view state; this struct only records whether the screen behind it
//! may scroll.

use chrono::{DateTime, Utc};

use crate::pedra::{Inventory, StoneDisplayRequest};

/// Central application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application lifecycle state
    pub app_state: AppLifecycleState,

    /// Loaded stones and current selection
    pub inventory_state: InventoryState,

    /// UI state
    pub ui_state: UIState,

    /// Error and notification state
    pub notification_state: NotificationState,
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self {
            app_state: AppLifecycleState::default(),
            inventory_state: InventoryState::default(),
            ui_state: UIState::default(),
            notification_state: NotificationState::default(),
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        matches!(self.app_state.lifecycle, LifecyclePhase::Quitting)
    }

    /// Set the quit flag
    pub fn set_should_quit(&mut self, should_quit: bool) {
        if should_quit {
            self.app_state.lifecycle = LifecyclePhase::Quitting;
        }
    }

    /// Enter the running phase once the first frame is drawn
    pub fn mark_running(&mut self) {
        if self.app_state.lifecycle == LifecyclePhase::Starting {
            self.app_state.lifecycle = LifecyclePhase::Running;
        }
    }

    /// Replace the inventory and reset the selection
    pub fn set_inventory(&mut self, inventory: Inventory) {
        self.inventory_state.inventory = inventory;
        self.inventory_state.selected = 0;
        self.inventory_state.loaded = true;
        self.inventory_state.loaded_at = Some(Utc::now());
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory_state.inventory
    }

    pub fn selected_index(&self) -> usize {
        self.inventory_state.selected
    }

    /// Stone under the cursor, if the inventory is not empty
    pub fn selected_stone(&self) -> Option<&StoneDisplayRequest> {
        self.inventory_state
            .inventory
            .get(self.inventory_state.selected)
    }

    /// Move the cursor to `index`, clamped to the inventory
    ///
    /// Ignored while the background is scroll-locked. Returns whether the
    /// selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.ui_state.background_scroll_locked || self.inventory().is_empty() {
            return false;
        }
        let index = index.min(self.inventory().len() - 1);
        let changed = index != self.inventory_state.selected;
        self.inventory_state.selected = index;
        changed
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.selected_index().saturating_add(1))
    }

    pub fn select_previous(&mut self) -> bool {
        self.select(self.selected_index().saturating_sub(1))
    }

    pub fn page_down(&mut self) -> bool {
        self.select(self.selected_index().saturating_add(self.ui_state.page_size))
    }

    pub fn page_up(&mut self) -> bool {
        self.select(self.selected_index().saturating_sub(self.ui_state.page_size))
    }

    pub fn select_first(&mut self) -> bool {
        self.select(0)
    }

    pub fn select_last(&mut self) -> bool {
        self.select(usize::MAX)
    }

    /// Freeze the screen behind an open modal
    pub fn lock_background_scroll(&mut self) {
        self.ui_state.background_scroll_locked = true;
    }

    /// Let the screen scroll again after the modal closes
    pub fn unlock_background_scroll(&mut self) {
        self.ui_state.background_scroll_locked = false;
    }

    pub fn is_background_scroll_locked(&self) -> bool {
        self.ui_state.background_scroll_locked
    }

    /// Add an error to the notification system
    pub fn add_error(&mut self, error: String) {
        self.notification_state.errors.push(ErrorNotification {
            message: error,
            timestamp: Utc::now(),
        });
    }

    /// Most recent error, shown in the status bar
    pub fn latest_error(&self) -> Option<&ErrorNotification> {
        self.notification_state.errors.last()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppLifecycleState {
    pub lifecycle: LifecyclePhase,
}

impl Default for AppLifecycleState {
    fn default() -> Self {
        Self {
            lifecycle: LifecyclePhase::Starting,
        }
    }
}

/// Application lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Starting,
    Running,
    Quitting,
}

/// Inventory state
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub inventory: Inventory,
    pub selected: usize,
    pub loaded: bool,
    /// When the current inventory arrived, shown in the status bar
    pub loaded_at: Option<DateTime<Utc>>,
}

/// UI state
#[derive(Debug, Clone)]
pub struct UIState {
    /// Set while a modal is open
    pub background_scroll_locked: bool,
    /// Rows moved by PageUp/PageDown
    pub page_size: usize,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            background_scroll_locked: false,
            page_size: 10,
        }
    }
}

/// Notification state
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    pub errors: Vec<ErrorNotification>,
}

/// Error notification
#[derive(Debug, Clone)]
pub struct ErrorNotification {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
