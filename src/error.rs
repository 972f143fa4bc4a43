use nvml_wrapper::error::NvmlError;
use thiserror::Error;

/// Any failure that aborts the report.
#[derive(Error, Debug)]
pub enum SysdumpError {
    #[error("{0} is not available on this system")]
    Unavailable(&'static str),

    #[error("boot time {0} cannot be represented as a local time")]
    InvalidBootTime(u64),

    #[error("GPU query failed: {0}")]
    Gpu(#[from] NvmlError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SysdumpError>;
