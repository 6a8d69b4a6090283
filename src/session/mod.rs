/*!
 * Interactive editing session.
 *
 * This module provides:
 * - The session context object (author, form fields, subtitle list)
 * - Login and command dispatch through `SessionManager`
 * - The line-oriented command grammar of the editor
 */

pub mod commands;
pub mod manager;
pub mod models;

// Re-export main types
pub use commands::Command;
pub use manager::{Outcome, SessionManager};
pub use models::{SessionMeta, SubtitleSession, SubtitleSheet};
