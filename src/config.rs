use crate::cli::RunArgs;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "split_pdfs";

/// Where a batch run reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub skip_empty: bool,
}

impl SplitConfig {
    pub fn from_args(args: &RunArgs) -> Self {
        SplitConfig {
            source_dir: args.source_dir.clone().unwrap_or_else(default_source_dir),
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            skip_empty: args.skip_empty,
        }
    }
}

/// The directory the executable lives in, or `.` if that can't be determined
pub fn default_source_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
