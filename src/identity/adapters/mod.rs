//! Adapter implementations of identity ports.

pub mod memory;

pub use memory::InMemoryUserDirectory;
