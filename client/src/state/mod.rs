//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `message` holds the data model, `board` the view-model that mutates it, and
//! `ui` presentation-only flags.

pub mod board;
pub mod message;
pub mod ui;
