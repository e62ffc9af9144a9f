//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues authenticated requests, `error` defines the failure
//! taxonomy, and `types` holds the wire DTOs.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;
