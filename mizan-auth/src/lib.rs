//! Permission evaluation for the mizan case-management platform.
//!
//! This crate compiles a role → grant policy into an immutable lookup table
//! and answers authorization questions for an explicit user context. Every
//! decision is a plain boolean and fails closed: anonymous requests,
//! deactivated accounts, and capabilities the policy does not grant all
//! evaluate to denied. Callers own the translation of a denial into an
//! HTTP 401 vs 403.

pub mod config;
pub mod grants;
pub mod service;


// Re-export the main types and service for easy access
pub use config::ConfigManager;
pub use grants::{AccessPolicy, GrantSpec, RoleGrants, RolePermissionTable};
pub use service::{AccessControlService, ResourceScope};
