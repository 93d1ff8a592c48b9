//! In-memory host: history persistence, capture events and sample seeding.

mod memory_host;
mod samples;

pub use memory_host::InMemoryHost;
pub use samples::SAMPLE_ENTRIES;
