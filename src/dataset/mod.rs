//! 数据集处理
//!
//! 不同数据源通过 [DatasetTrait] 提供统一的逐帧接口，
//! [Dataset] 按配置中的数据集标签选择具体实现。
mod aisg;
pub mod image_reader;
pub mod layout;
pub mod sync;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use aisg::AisgDataset;
pub use image_reader::{ImageCrateReader, ImageReader};
pub use layout::{DataDirectoryLayout, DepthSource};
pub use sync::{FramePairing, PairIndex, TimestampTable};

use crate::camera::IntrinsicsParams;
use crate::config::DatasetConfig;
use crate::error::{DatasetError, Result};
use crate::global_types::{Depth, Image, Pose};

pub type DefaultDataset = aisg::AisgDataset;

pub trait DatasetTrait: Send + Sync {
    /// 帧数 N
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 第 `index` 帧的时间戳（微秒）
    fn get_timestamp(&self, index: usize) -> Result<f64>;

    /// 第 `index` 帧的 RGB 图像
    fn get_image(&self, index: usize) -> Result<Image>;

    /// 是否提供深度数据，调用 [DatasetTrait::get_depth] 之前查询
    fn supports_depth(&self) -> bool {
        false
    }

    fn get_depth(&self, _index: usize) -> Result<Depth> {
        Err(DatasetError::NotSupported(
            "depth is not provided by this dataset".into(),
        ))
    }

    fn get_intrinsics_param(&self) -> &IntrinsicsParams;

    fn get_data_dir(&self) -> &DataDirectoryLayout;

    fn frame_pairing(&self) -> &FramePairing;

    fn timestamps(&self) -> &TimestampTable;

    /// 保存估计轨迹，时间戳从配置的起始帧开始
    fn save_result_traj(&self, path: &Path, poses: &[Pose]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// AISG 驾驶序列
    Aisg,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Aisg => "aisg",
        }
    }
}

impl FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aisg" => Ok(DatasetKind::Aisg),
            other => Err(DatasetError::Config(format!("unknown dataset [{}]", other))),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 所有已实现的数据集
pub enum Dataset {
    Aisg(AisgDataset),
}

impl Dataset {
    pub fn load(cfg: DatasetConfig) -> Result<Self> {
        let kind: DatasetKind = cfg.dataset.parse()?;
        log::info!("loading {} sequence {}", kind, cfg.seq);
        match kind {
            DatasetKind::Aisg => Ok(Dataset::Aisg(AisgDataset::new(cfg)?)),
        }
    }

    pub fn kind(&self) -> DatasetKind {
        match self {
            Dataset::Aisg(_) => DatasetKind::Aisg,
        }
    }

    fn inner(&self) -> &dyn DatasetTrait {
        match self {
            Dataset::Aisg(d) => d,
        }
    }
}

impl DatasetTrait for Dataset {
    fn len(&self) -> usize {
        self.inner().len()
    }

    fn get_timestamp(&self, index: usize) -> Result<f64> {
        self.inner().get_timestamp(index)
    }

    fn get_image(&self, index: usize) -> Result<Image> {
        self.inner().get_image(index)
    }

    fn supports_depth(&self) -> bool {
        self.inner().supports_depth()
    }

    fn get_depth(&self, index: usize) -> Result<Depth> {
        self.inner().get_depth(index)
    }

    fn get_intrinsics_param(&self) -> &IntrinsicsParams {
        self.inner().get_intrinsics_param()
    }

    fn get_data_dir(&self) -> &DataDirectoryLayout {
        self.inner().get_data_dir()
    }

    fn frame_pairing(&self) -> &FramePairing {
        self.inner().frame_pairing()
    }

    fn timestamps(&self) -> &TimestampTable {
        self.inner().timestamps()
    }

    fn save_result_traj(&self, path: &Path, poses: &[Pose]) -> Result<()> {
        self.inner().save_result_traj(path, poses)
    }
}
