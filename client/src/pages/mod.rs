//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, fetching, form
//! submission) and delegates rendering details to `components`.

pub mod client;
pub mod home;
pub mod login;
pub mod manager;
pub mod trainer;
