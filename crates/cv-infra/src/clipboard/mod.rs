mod memory;

pub use memory::MemoryClipboard;
