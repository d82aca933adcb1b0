//! Append-only conversation log.
//!
//! There is no way to remove or edit an entry once it is in: the only
//! mutation is [`Timeline::append`], and readers only ever get `&Message`.

use chrono::Utc;
use console_types::message::{Message, MessageDraft, MessageId};

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    messages: Vec<Message>,
    last_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a draft with the next id and the current instant, and push it.
    pub fn append(&mut self, draft: MessageDraft) -> &Message {
        self.last_id += 1;
        self.messages.push(Message {
            id: MessageId(self.last_id),
            role: draft.role,
            content: draft.content,
            timestamp: Utc::now(),
            success: draft.success,
            error: draft.error,
        });
        // just pushed
        &self.messages[self.messages.len() - 1]
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        // ids are dense and start at 1
        let idx = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.messages.get(idx)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
