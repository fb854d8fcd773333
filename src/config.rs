//! 数据集配置
//!
//! 构造数据集时传入一次，之后只读。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// 数据集标签，例如 "aisg"
    pub dataset: String,
    /// 序列名，例如 "seq5"
    pub seq: String,
    /// 保存轨迹时时间戳的起始帧
    #[serde(default)]
    pub start_frame: usize,
    pub directory: DirectoryConfig,
    pub image: ImageConfig,
    #[serde(default)]
    pub depth: DepthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub img_seq_dir: PathBuf,
    pub config_dir: PathBuf,
    #[serde(default)]
    pub depth_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub height: u32,
    pub width: u32,
    #[serde(default = "ImageConfig::default_ext")]
    pub ext: String,
}

impl ImageConfig {
    fn default_ext() -> String {
        "png".to_string()
    }
}

/// 深度来源。保留原始字符串，非法值在解析目录时报错。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepthConfig {
    #[serde(default)]
    pub depth_src: Option<String>,
}

impl DatasetConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DatasetError::MissingFile(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| DatasetError::Config(format!("{}: {}", path.display(), e)))
    }
}
