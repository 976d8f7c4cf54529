//! Message board view-model.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BoardState` is the single in-memory model behind the page. Components hold
//! it in a `RwSignal` and drive every mutation through `maybe_update`, so each
//! user event applies one transition and re-renders only when it changed
//! something. The form draft lives in its own `RwSignal<Draft>` so typing does
//! not touch the message list.
//!
//! Every transition is total: blank submissions and unknown ids are ignored
//! rather than reported.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use super::message::{Message, MessageId, Reaction, Reactions};
use super::ui::Theme;
use crate::util::clock;

/// Ids of the posts `with_welcome` seeds the board with.
pub const WELCOME_IDS: [MessageId; 2] = [MessageId(1), MessageId(2)];

/// Unsubmitted form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub author: String,
    pub text: String,
}

/// Messages (newest first) and theme for one page session.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    messages: Vec<Message>,
    theme: Theme,
    /// Highest id handed out so far; fresh ids always exceed it.
    last_id: u64,
}

impl BoardState {
    /// Board seeded with the two welcome posts shown on first load.
    pub fn with_welcome(timestamp: &str) -> Self {
        let [welcome_id, guide_id] = WELCOME_IDS;

        let mut welcome = Message::new(
            welcome_id,
            "Welcome Bot",
            "Welcome to the Message Board! 🎉 Try the theme toggle above!",
            timestamp,
        );
        welcome.reactions = Reactions::new(5, 3, 1);

        let mut guide = Message::new(
            guide_id,
            "Learning Guide",
            "This is a Leptos app. Try adding a message below! You can also react to messages.",
            timestamp,
        );
        guide.reactions = Reactions::new(2, 1, 0);

        Self::from_messages(vec![welcome, guide])
    }

    /// Board holding `messages` in the given (newest-first) order.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let last_id = messages.iter().map(|m| m.id.0).max().unwrap_or(0);
        Self { messages, last_id, ..Self::default() }
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

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replace the timestamp of the welcome posts still on the board.
    ///
    /// Server rendering stamps them with the server clock; the browser calls
    /// this once hydrated so they show the visitor's local time.
    pub fn restamp_welcome(&mut self, timestamp: &str) -> bool {
        let mut changed = false;
        for message in self.messages.iter_mut().filter(|m| WELCOME_IDS.contains(&m.id)) {
            if message.timestamp != timestamp {
                timestamp.clone_into(&mut message.timestamp);
                changed = true;
            }
        }
        changed
    }

    /// Post `draft` and clear it. A rejected draft is left as typed.
    pub fn submit_draft(&mut self, draft: &mut Draft) -> bool {
        let accepted = self.submit_message(&draft.author, &draft.text);
        if accepted {
            *draft = Draft::default();
        }
        accepted
    }

    /// Post a message stamped with the current time.
    ///
    /// Returns `false` and leaves the board untouched when either field is
    /// blank after trimming.
    pub fn submit_message(&mut self, author: &str, text: &str) -> bool {
        let now_ms = clock::now_ms();
        self.submit_message_at(author, text, now_ms, &clock::display_timestamp(now_ms))
    }

    /// [`BoardState::submit_message`] with an explicit clock reading.
    ///
    /// Blankness is judged on the trimmed fields; the message keeps them as
    /// typed.
    pub fn submit_message_at(&mut self, author: &str, text: &str, now_ms: u64, timestamp: &str) -> bool {
        if author.trim().is_empty() || text.trim().is_empty() {
            return false;
        }

        let id = self.next_id(now_ms);
        self.messages.insert(0, Message::new(id, author, text, timestamp));
        log::debug!("message {id} posted by {author}");
        true
    }

    /// Add one `reaction` to the message with `id`, if it exists.
    pub fn react(&mut self, id: MessageId, reaction: Reaction) -> bool {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        message.reactions = message.reactions.incremented(reaction);
        log::debug!("message {id} reaction {} -> {}", reaction.symbol(), message.reactions.get(reaction));
        true
    }

    /// Remove the message with `id`, if it exists.
    pub fn delete_message(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        let removed = self.messages.len() != before;
        if removed {
            log::debug!("message {id} deleted");
        }
        removed
    }

    /// Flip between dark and light. Always changes state.
    pub fn toggle_theme(&mut self) -> bool {
        self.theme = self.theme.toggled();
        log::debug!("theme -> {}", self.theme.as_str());
        true
    }

    /// Time-based id, bumped past the last one issued when the clock has not
    /// advanced.
    fn next_id(&mut self, now_ms: u64) -> MessageId {
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;
        MessageId(id)
    }
}
