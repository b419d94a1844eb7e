//! Project archiving.

mod zip_file;

pub use zip_file::ZipArchiver;
