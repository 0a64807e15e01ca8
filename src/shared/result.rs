/// Result alias used across the crate.
///
/// Typed errors are raised as [`crate::shared::error::DepsCheckError`] and carried
/// as `anyhow::Error` so callers can attach context while propagating.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
