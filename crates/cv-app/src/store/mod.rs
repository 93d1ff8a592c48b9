//! Entry list and the per-selection inspection cache.

mod entry_list;
mod inspection;

pub use entry_list::EntryListStore;
pub use inspection::Inspection;
