/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, ISSUES_FILE, MEASURES_FILE};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
