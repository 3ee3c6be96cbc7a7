//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of registry vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for persisted entities
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across every layer.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
