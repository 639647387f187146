/// Filesystem adapters for file I/O operations
mod file_writer;
mod recorded_pages_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use recorded_pages_reader::RecordedPagesReader;
