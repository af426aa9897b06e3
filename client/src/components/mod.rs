//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (navigation bars, status panels,
//! program cards) and the role guard that wraps every restricted page.

pub mod nav_bar;
pub mod program_card;
pub mod require_role;
pub mod status_panel;
pub mod user_form_fields;
