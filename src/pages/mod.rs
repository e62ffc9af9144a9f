//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (access checks, data fetches)
//! and delegates rendering details to `components`.

pub mod admin;
pub mod dashboard;
pub mod index;
pub mod login;
pub mod tool;
