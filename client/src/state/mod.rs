//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, list loading, form drafts) so pages can
//! depend on small focused models that are testable without rendering.

pub mod auth;
pub mod load;
pub mod user_form;
pub mod workout;
