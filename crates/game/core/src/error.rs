//! Common error infrastructure for game-core.
//!
//! Rule-level conditions (walls, missing gems, finished games) are reported as
//! [`crate::ActionOutcome`] data and never appear here. Only configuration
//! problems surface as errors.

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Error codes are stable strings suitable for logs and client branching
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
