//! Adapter implementations of ingest ports.

pub mod fs;
pub mod memory;
pub mod xlsx;

pub use fs::FsStaging;
pub use xlsx::XlsxDecoder;
