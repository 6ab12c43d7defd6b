/// In-memory adapters used when no server is configured
mod in_memory_transitioner;

pub use in_memory_transitioner::InMemoryTransitioner;
