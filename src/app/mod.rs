//! Application core module
//!
//! Contains the main application loop, state management and event handling.

pub mod events;
pub mod state;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    ui::UI,
};
use events::{AppEvent, EventHandler};
use state::AppState;

/// Main application struct
///
/// Manages terminal setup and cleanup, the render loop, input routing and
/// background inventory loading.
pub struct App {
    /// Application state
    state: AppState,
    /// Event handler for async operations
    event_handler: EventHandler,
    /// UI renderer
    ui: UI,
    /// Application configuration
    config: Config,
    /// Inventory file being shown
    inventory_path: PathBuf,
    /// Performance metrics
    startup_time: Duration,
}

impl App {
    /// Create an application from an already loaded configuration
    ///
    /// `inventory_path` overrides the file named in the configuration.
    pub fn with_config(
        config: Config,
        inventory_path: Option<PathBuf>,
        init_start: Instant,
    ) -> Self {
        let inventory_path = inventory_path.unwrap_or_else(|| config.inventory.path.clone());

        let mut state = AppState::new();
        state.ui_state.page_size = config.ui.page_size.max(1);

        let event_handler = EventHandler::new();
        let ui = UI::new(&config.ui, &config.modal);

        info!("Initializing Pedra Viewer");
        let startup_time = init_start.elapsed();
        debug!("Application initialized in {:?}", startup_time);

        Self {
            state,
            event_handler,
            ui,
            config,
            inventory_path,
            startup_time,
        }
    }

    /// Run the main application loop
    ///
    /// Sets up the terminal, starts the inventory load, and renders until
    /// the user quits.
    pub async fn run(mut self) -> AppResult<()> {
        info!("Starting application main loop");

        self.setup_terminal()?;

        self.event_handler
            .spawn_inventory_load(self.inventory_path.clone(), self.config.inventory.sort_on_load);

        let result = self.main_loop().await;

        self.cleanup_terminal()?;

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal(&self) -> AppResult<()> {
        enable_raw_mode().map_err(|e| {
            warn!("Failed to enable raw mode: {}", e);
            AppError::Terminal(e.to_string())
        })?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            warn!("Failed to enter alternate screen: {}", e);
            AppError::Terminal(e.to_string())
        })?;
        if self.config.ui.enable_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(&self) -> AppResult<()> {
        disable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        execute!(stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Main application event loop
    async fn main_loop(&mut self) -> AppResult<()> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;
        let poll_interval = Duration::from_millis(self.config.ui.refresh_rate_ms);

        info!("Entering main application loop");

        loop {
            let render_start = Instant::now();
            terminal.draw(|f| {
                self.ui.render(f, &self.state);
            })?;
            self.state.mark_running();

            let render_time = render_start.elapsed();
            if render_time > Duration::from_millis(16) {
                debug!("Render time exceeded 16ms target: {:?}", render_time);
            }

            self.handle_events(poll_interval)?;

            if self.state.should_quit() {
                info!("Application quit requested");
                break;
            }

            self.process_background_tasks();

            // Yield so the background load task can make progress
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Handle input events; returns whether an event was processed
    fn handle_events(&mut self, poll_interval: Duration) -> AppResult<bool> {
        if !event::poll(poll_interval)? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Mouse(mouse) => self.ui.handle_mouse_event(mouse, &mut self.state)?,
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                self.ui.handle_resize(width, height);
            }
            _ => {}
        }

        Ok(true)
    }

    /// Route a key press: the modal sees it first, then global keys, then the list
    pub fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<()> {
        if self.ui.is_modal_open() {
            return self.ui.handle_key_event(key, &mut self.state);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.set_should_quit(true);
                info!("Quit requested by user");
            }
            _ => self.ui.handle_key_event(key, &mut self.state)?,
        }
        Ok(())
    }

    /// Process completed background tasks
    fn process_background_tasks(&mut self) {
        while let Some(event) = self.event_handler.try_receive_event() {
            self.handle_app_event(event);
        }
    }

    /// Handle application events from background tasks
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::InventoryLoaded(inventory) => {
                debug!("Inventory updated with {} stones", inventory.len());
                self.state.set_inventory(inventory);
            }
            AppEvent::Error(error) => {
                warn!("Background task error: {}", error);
                self.state.add_error(error);
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn ui(&self) -> &UI {
        &self.ui
    }

    /// Get application startup time for performance monitoring
    pub fn startup_time(&self) -> Duration {
        self.startup_time
    }
}
