/// Filesystem adapters for report discovery and file I/O
mod file_finder;
mod file_reader;
mod file_writer;

pub use file_finder::{WalkDirFileFinder, MAX_SEARCH_DEPTH};
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
