//! UI-level state that drives rendering.
//! This is a read-only projection of the session core,
//! updated each frame by draining the EventBus.

use console_types::analytics::Dashboard;
use console_types::event::ConsoleEvent;
use console_types::message::Message;
use console_types::session::DispatchState;

/// State visible to UI panels
pub struct UiState {
    /// Mirror of the conversation timeline
    pub messages: Vec<Message>,
    /// Current dispatcher state
    pub status: DispatchState,
    /// Latest dashboard pushed by the core
    pub dashboard: Dashboard,
    /// Previews of loaded datasets, sorted by key
    pub datasets: Vec<DatasetCard>,
    /// Input field content
    pub input_text: String,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
}

/// Sidebar card for one loaded dataset
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetCard {
    pub key: String,
    pub preview: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            status: DispatchState::Idle,
            dashboard: Dashboard::default(),
            datasets: Vec::new(),
            input_text: String::new(),
            show_settings: false,
            status_text: DispatchState::Idle.label(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ConsoleEvent>) {
        for event in events {
            match event {
                ConsoleEvent::StatusChanged(status) => {
                    self.status_text = status.label();
                    self.status = status;
                }
                ConsoleEvent::MessageAppended(message) => {
                    self.messages.push(message);
                }
                ConsoleEvent::DatasetUpdated {
                    key,
                    preview,
                    dashboard,
                } => {
                    self.dashboard = dashboard;
                    match self.datasets.iter_mut().find(|card| card.key == key) {
                        Some(card) => card.preview = preview,
                        None => {
                            self.datasets.push(DatasetCard { key, preview });
                            self.datasets.sort_by(|a, b| a.key.cmp(&b.key));
                        }
                    }
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    pub fn has_data(&self) -> bool {
        !self.datasets.is_empty()
    }

    /// "Loaded" once any dataset has arrived
    pub fn data_status(&self) -> &'static str {
        if self.has_data() {
            "Loaded"
        } else {
            "Pending"
        }
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_busy()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
