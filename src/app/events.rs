//! Application event system
//!
//! Background tasks report back to the main loop through an unbounded
//! tokio channel.

use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::debug;

use crate::pedra::Inventory;

/// Event handler for async operations
pub struct EventHandler {
    /// Sender for application events
    event_sender: mpsc::UnboundedSender<AppEvent>,
    /// Receiver for application events
    event_receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        Self {
            event_sender,
            event_receiver,
        }
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive_event(&mut self) -> Option<AppEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Get a cloned sender for background tasks
    pub fn get_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_sender.clone()
    }

    /// Load the inventory file in the background
    ///
    /// Delivers `InventoryLoaded` or `Error` once the read finishes.
    pub fn spawn_inventory_load(&self, path: PathBuf, sort: bool) {
        let sender = self.get_sender();
        tokio::spawn(async move {
            debug!("Background inventory load started: {}", path.display());
            let event = match Inventory::load_from_file(&path).await {
                Ok(inventory) if sort => AppEvent::InventoryLoaded(inventory.sorted()),
                Ok(inventory) => AppEvent::InventoryLoaded(inventory),
                Err(e) => AppEvent::Error(format!(
                    "Failed to load inventory {}: {}",
                    path.display(),
                    e
                )),
            };
            // The receiver is gone only when the app is shutting down
            let _ = sender.send(event);
        });
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Application events for async communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Inventory finished loading
    InventoryLoaded(Inventory),

    /// A background task failed
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_inventory_load_is_delivered() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Ruby T1"}}, {{"name": "Jade Tier 4"}}]"#).unwrap();

        let mut handler = EventHandler::new();
        handler.spawn_inventory_load(file.path().to_path_buf(), true);

        let event = handler.event_receiver.recv().await.expect("event delivered");
        match event {
            AppEvent::InventoryLoaded(inventory) => {
                assert_eq!(inventory.len(), 2);
                assert_eq!(inventory.get(0).unwrap().name, "Jade Tier 4");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_inventory_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let mut handler = EventHandler::new();
        handler.spawn_inventory_load(file.path().to_path_buf(), false);

        let event = handler.event_receiver.recv().await.expect("event delivered");
        assert!(matches!(event, AppEvent::Error(_)));
    }

    #[test]
    fn test_cloned_sender_reaches_receiver() {
        let mut handler = EventHandler::new();
        handler
            .get_sender()
            .send(AppEvent::Error("disk full".to_string()))
            .unwrap();
        assert!(matches!(
            handler.try_receive_event(),
            Some(AppEvent::Error(message)) if message == "disk full"
        ));
        assert!(handler.try_receive_event().is_none());
    }
}
