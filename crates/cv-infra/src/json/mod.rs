mod processor;

pub use processor::SerdeJsonProcessor;
