pub mod reader;
pub mod writer;

pub use reader::{CsvTableReader, InputTable};
pub use writer::TsvTableWriter;
