//! Outbox between the dispatcher and whatever renders the session.
//!
//! Single-threaded: the dispatcher pushes from spawned futures, the UI takes
//! everything queued once per frame, in emission order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use console_types::event::ConsoleEvent;

/// Shared event queue — clone-cheap via Rc; clones see the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ConsoleEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ConsoleEvent) {
        log::trace!("event: {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<ConsoleEvent> {
        std::mem::take(&mut *self.queue.borrow_mut()).into()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub fn has_pending(&self) -> bool {
        !self.is_empty()
    }
}
