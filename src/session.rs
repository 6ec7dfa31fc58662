use uuid::Uuid;

use crate::types::Message;

/// Ordered, append-only conversation history for one run.
#[derive(Clone, Debug)]
pub struct Transcript {
    pub id: String,
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
        }
    }

    // Append one message
    pub fn push(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
