//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, clock,
//! navigation side effects) from page and component logic.

pub mod auth;
pub mod clock;
pub mod cookie_session;
