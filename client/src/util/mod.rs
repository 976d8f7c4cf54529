//! Browser glue shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so state stays testable on the native target.

pub mod clock;
pub mod dark_mode;
