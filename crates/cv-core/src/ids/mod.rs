//! ID type wrappers for type safety.

mod entry_id;

pub use entry_id::EntryId;
