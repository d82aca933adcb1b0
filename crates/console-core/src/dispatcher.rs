//! Request dispatcher — the only writer of session state.
//!
//! Each of the three call kinds runs the same cycle:
//! 1. Enter `Busy` (rejected with [`ConsoleError::Busy`] unless `Idle`)
//! 2. For user-initiated calls, append the user's prompt right away
//! 3. Await the agent service (the only suspension point)
//! 4. Turn the outcome, success or failure, into exactly one agent message
//! 5. Return to `Idle` when the [`InFlight`] guard drops
//!
//! Step 5 runs on every exit path, including a future dropped mid-call.
//!
//! Futures are spawned via `wasm_bindgen_futures::spawn_local` by the app;
//! no `RefCell` borrow is ever held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;
use serde_json::Value;
use console_types::{
    ConsoleError, Result,
    analytics::Dashboard,
    api::ChatPayload,
    dataset::DatasetKind,
    event::ConsoleEvent,
    message::{Message, MessageDraft, MessageId},
    session::{CallKind, DispatchState},
};

use crate::analytics;
use crate::event_bus::EventBus;
use crate::ports::AgentApiPort;
use crate::store::{self, DatasetStore};
use crate::timeline::Timeline;

/// The single mutable root of a console session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub timeline: Timeline,
    pub store: DatasetStore,
    pub status: DispatchState,
}

/// Shared handle to the session — clone-cheap via Rc.
#[derive(Clone)]
pub struct Dispatcher {
    state: Rc<RefCell<SessionState>>,
    event_bus: EventBus,
}

/// Proof that a call holds the busy state. Dropping it returns to `Idle`.
#[must_use = "the dispatcher returns to Idle as soon as this guard is dropped"]
pub struct InFlight {
    state: Rc<RefCell<SessionState>>,
    event_bus: EventBus,
    kind: CallKind,
}

impl InFlight {
    pub fn kind(&self) -> &CallKind {
        &self.kind
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => state.status = DispatchState::Idle,
            Err(_) => {
                log::error!("Session state borrowed while releasing {}", self.kind);
                return;
            }
        }
        log::debug!("{} settled", self.kind);
        self.event_bus.emit(ConsoleEvent::StatusChanged(DispatchState::Idle));
    }
}

impl Dispatcher {
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::default())),
            event_bus,
        }
    }

    pub fn status(&self) -> DispatchState {
        self.state.borrow().status.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().status.is_busy()
    }

    /// Read-only access to the whole session.
    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().timeline.as_slice().to_vec()
    }

    pub fn dataset(&self, key: &str) -> Option<Value> {
        self.state.borrow().store.read(key).cloned()
    }

    /// Dashboard computed from the store as it is right now.
    pub fn dashboard(&self) -> Dashboard {
        analytics::summarize(&self.state.borrow().store)
    }

    /// `Idle → Busy(kind)`. Fails with [`ConsoleError::Busy`] from any other state.
    pub fn begin(&self, kind: CallKind) -> Result<InFlight> {
        {
            let mut state = self.state.borrow_mut();
            if let DispatchState::Busy(current) = &state.status {
                log::warn!("Rejected {}: {} still in flight", kind, current);
                return Err(ConsoleError::Busy);
            }
            state.status = DispatchState::Busy(kind.clone());
        }
        log::debug!("{} started", kind);
        self.event_bus
            .emit(ConsoleEvent::StatusChanged(DispatchState::Busy(kind.clone())));
        Ok(InFlight {
            state: self.state.clone(),
            event_bus: self.event_bus.clone(),
            kind,
        })
    }

    /// Free-text question, sent along with every loaded dataset.
    pub async fn chat(&self, api: &dyn AgentApiPort, text: &str) -> Result<MessageId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConsoleError::EmptyInput);
        }
        let _flight = self.begin(CallKind::Chat)?;

        self.append(MessageDraft::user(text));
        let payload = ChatPayload {
            message: text.to_string(),
            context: self.state.borrow().store.snapshot(),
        };

        let draft = match api.chat(payload).await {
            Ok(reply) => {
                if !reply.success {
                    log::warn!("Agent reported failure: {:?}", reply.error);
                }
                MessageDraft::from_reply(reply)
            }
            Err(e) => {
                log::warn!("Chat request to {} failed: {}", api.endpoint_name(), e);
                MessageDraft::failure(format!("Connection error: {}", e))
            }
        };
        Ok(self.append(draft))
    }

    /// Canned analysis run by the agent; produces messages only.
    pub async fn quick_analysis(&self, api: &dyn AgentApiPort, analysis: &str) -> Result<MessageId> {
        let analysis = analysis.trim();
        if analysis.is_empty() {
            return Err(ConsoleError::EmptyInput);
        }
        let _flight = self.begin(CallKind::QuickAnalysis(analysis.to_string()))?;

        self.append(MessageDraft::user(format!("Run quick analysis: {}", analysis)));

        let draft = match api.analyze(analysis).await {
            Ok(reply) => MessageDraft::from_reply(reply),
            Err(e) => {
                log::warn!("Analysis {} failed: {}", analysis, e);
                MessageDraft::failure(format!("Analysis error: {}", e))
            }
        };
        Ok(self.append(draft))
    }

    /// Fetch a sample dataset and store it under its kind's key.
    ///
    /// A failed fetch leaves the store untouched and is reported as an agent
    /// message, like the other two call kinds.
    pub async fn generate_dataset(&self, api: &dyn AgentApiPort, kind: DatasetKind) -> Result<MessageId> {
        let _flight = self.begin(CallKind::GenerateDataset(kind))?;

        let draft = match api.sample_data(kind).await {
            Ok(sample) => {
                self.write_dataset(kind.key(), sample.data);
                let description = if sample.description.trim().is_empty() {
                    format!("{} data", kind)
                } else {
                    sample.description
                };
                MessageDraft::agent(format!("✅ {} generated successfully.", description))
            }
            Err(e) => {
                log::error!("Error generating {} data: {}", kind, e);
                MessageDraft::failure(format!("Dataset generation failed: {}", e))
            }
        };
        Ok(self.append(draft))
    }

    fn append(&self, draft: MessageDraft) -> MessageId {
        let message = self.state.borrow_mut().timeline.append(draft).clone();
        let id = message.id;
        self.event_bus.emit(ConsoleEvent::MessageAppended(message));
        id
    }

    fn write_dataset(&self, key: &str, payload: Value) {
        let preview = store::preview_payload(&payload);
        let dashboard = {
            let mut state = self.state.borrow_mut();
            state.store.write(key, payload);
            analytics::summarize(&state.store)
        };
        log::info!("Dataset {} updated", key);
        self.event_bus.emit(ConsoleEvent::DatasetUpdated {
            key: key.to_string(),
            preview,
            dashboard,
        });
    }
}
