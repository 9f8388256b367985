//! Council discussion log and the Architect's input channel
//!
//! The log is append-only for the life of a session; ids are assigned at
//! emission time and strictly increase. After ascension the Architect's
//! messages draw a canned reply from one of the two personas.

use crate::seed::{EINSTEIN_REPLIES, TESLA_REPLIES};
use elysium_core::{CouncilMessage, MessageKind, Speaker};
use rand::Rng;

pub struct CouncilLog {
    messages: Vec<CouncilMessage>,
    next_id: u64,
}

impl Default for CouncilLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CouncilLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a message, assigning it the next sequence id.
    pub fn append(
        &mut self,
        speaker: Speaker,
        kind: MessageKind,
        text: impl Into<String>,
    ) -> CouncilMessage {
        let message = CouncilMessage {
            id: self.next_id,
            speaker,
            kind,
            text: text.into(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[CouncilMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Pick a canned post-ascension reply from one of the two personas.
pub fn canned_reply<R: Rng>(rng: &mut R) -> (Speaker, &'static str) {
    if rng.gen_bool(0.5) {
        (
            Speaker::Tesla,
            TESLA_REPLIES[rng.gen_range(0..TESLA_REPLIES.len())],
        )
    } else {
        (
            Speaker::Einstein,
            EINSTEIN_REPLIES[rng.gen_range(0..EINSTEIN_REPLIES.len())],
        )
    }
}

/// Handle a free-form Architect message. Blank input is ignored; after
/// ascension a persona answers, so exactly two messages are appended.
/// Returns the appended messages for broadcasting.
pub fn architect_message<R: Rng>(
    log: &mut CouncilLog,
    rng: &mut R,
    ascended: bool,
    text: &str,
) -> Vec<CouncilMessage> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let mut appended = vec![log.append(Speaker::Architect, MessageKind::Thought, text)];
    if ascended {
        let (speaker, reply) = canned_reply(rng);
        appended.push(log.append(speaker, MessageKind::Thought, reply));
    }
    appended
}
