//! In-memory repository implementations for testing and development.

mod config;

pub use config::InMemoryConfigRepository;
