pub mod error;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult};
pub use formats::ImageFormat;
pub use fs::{file_size, remove_file, sibling_with_format, sorted_file_names};
