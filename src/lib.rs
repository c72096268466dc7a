//! Discover C/C++ sources and headers under a directory and run a
//! style-driven formatter (`clang-format` by default) on each one in place.

pub mod cli;
pub mod dispatch;
pub mod traversal;
pub mod types;

pub use dispatch::{Formatter, dispatch, dispatch_with};
pub use traversal::{CollectOptions, SOURCE_EXTENSIONS, collect_files, is_source_file};
pub use types::{DispatchSummary, Outcome};
