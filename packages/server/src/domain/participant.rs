//! Participant derivation.
//!
//! A participant is not stored anywhere: it is a distinct sender observed in
//! a chat's message history.

use std::collections::HashSet;

use super::{Message, SenderId};

/// Collect the distinct senders of `messages`, in order of first appearance.
///
/// `messages` is expected in store (insertion) order.
pub fn derive_participants(messages: &[Message]) -> Vec<SenderId> {
    let mut seen = HashSet::with_capacity(messages.len());
    messages
        .iter()
        .map(Message::sender_id)
        .filter(|sender_id| seen.insert(*sender_id))
        .collect()
}
