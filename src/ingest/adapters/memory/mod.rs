//! In-memory adapters for ingestion ports.

mod job;
mod sheet;

pub use job::InMemoryJobRepository;
pub use sheet::InMemorySheetDecoder;
