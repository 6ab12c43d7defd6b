/// Result alias used across adapters and use cases; domain services stay infallible.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
