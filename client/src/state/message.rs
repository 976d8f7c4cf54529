//! Message data model: ids, reaction counters, and posted entries.
//!
//! DESIGN
//! ======
//! The reaction set is closed. `Reactions` stores one counter per variant so
//! every key is always present and a count can only move upward.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::fmt;

/// Unique identifier of a posted message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Emoji a reader can react with, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    ThumbsUp,
    Heart,
    Laugh,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::ThumbsUp, Reaction::Heart, Reaction::Laugh];

    /// Emoji rendered on the reaction button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::ThumbsUp => "👍",
            Self::Heart => "❤️",
            Self::Laugh => "😂",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::ThumbsUp => 0,
            Self::Heart => 1,
            Self::Laugh => 2,
        }
    }
}

/// Per-emoji reaction counts for one message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reactions {
    counts: [u32; 3],
}

impl Reactions {
    /// Counts given in `Reaction::ALL` order.
    pub fn new(thumbs_up: u32, heart: u32, laugh: u32) -> Self {
        Self { counts: [thumbs_up, heart, laugh] }
    }

    pub fn get(&self, reaction: Reaction) -> u32 {
        self.counts[reaction.index()]
    }

    /// Copy of these counts with `reaction` bumped by one.
    #[must_use]
    pub fn incremented(&self, reaction: Reaction) -> Self {
        let mut next = *self;
        let slot = &mut next.counts[reaction.index()];
        *slot = slot.saturating_add(1);
        next
    }
}

/// A single posted entry on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub author: String,
    pub text: String,
    /// Human-readable creation time, formatted once at post time.
    pub timestamp: String,
    pub reactions: Reactions,
}

impl Message {
    /// Fresh message with every reaction count at zero.
    pub fn new(id: MessageId, author: impl Into<String>, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            timestamp: timestamp.into(),
            reactions: Reactions::default(),
        }
    }

    /// Upper-cased first character of the author, shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }
}
