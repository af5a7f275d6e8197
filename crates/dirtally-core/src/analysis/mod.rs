/// Analysis modules — post-scan selection over a finished result.

pub mod top_files;

pub use top_files::{top_files, DEFAULT_TOP_N};
