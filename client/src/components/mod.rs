//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board chrome and message surfaces while reading/writing
//! the shared `RwSignal<BoardState>` from Leptos context.

pub mod footer;
pub mod header;
pub mod message_card;
pub mod message_form;
pub mod message_list;
