/// Result alias used across every layer of the crate.
/// Errors are carried as `anyhow::Error` so adapters can attach context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
