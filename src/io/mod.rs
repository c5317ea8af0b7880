pub mod csv_reader;
pub mod error;
pub mod record;
pub mod sinks;

// Re-export commonly used types
pub use csv_reader::CsvRecordStream;
pub use error::IoError;
pub use record::Record;
pub use sinks::{CsvSink, DiscardSink, JsonLinesSink, MemorySink, RecordSink};
