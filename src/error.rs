//! 错误类型
//!
//! 配置类错误（Config / MissingKey / MissingFile）在构造数据集时立即返回，
//! 逐帧错误（IndexOutOfRange / NotSupported）在对应的访问调用时返回。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Frame index {index} out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Length mismatch: {poses} poses vs {timestamps} timestamps")]
    LengthMismatch { poses: usize, timestamps: usize },

    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Timestamp decreases at index {index}")]
    Ordering { index: usize },

    #[error("Time file has {timestamps} entries but {images} images were found")]
    TimestampCount { timestamps: usize, images: usize },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        match e.into_kind() {
            csv::ErrorKind::Io(e) => DatasetError::Io(e),
            kind => DatasetError::Parse(format!("{:?}", kind)),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
