//! 视觉里程计评测用的数据集抽象层
//!
//! 把不同布局的录制序列统一成按帧号访问的接口：RGB 图像、可选深度、相机内参、
//! 以及估计轨迹的保存。
//!
//! ```no_run
//! use vo_dataset::{Dataset, DatasetConfig, DatasetTrait};
//!
//! let cfg = DatasetConfig::from_json_file("configs/aisg_seq5.json")?;
//! let dataset = Dataset::load(cfg)?;
//! let t0 = dataset.get_timestamp(0)?;
//! # Ok::<(), vo_dataset::DatasetError>(())
//! ```

pub mod camera;
pub mod config;
pub mod dataset;
pub mod error;
pub mod global_types;
pub mod save;

#[cfg(test)]
mod test_utils;

pub use camera::IntrinsicsParams;
pub use config::DatasetConfig;
pub use dataset::{Dataset, DatasetKind, DatasetTrait};
pub use error::{DatasetError, Result};
pub use global_types::{Depth, Image, Pose};
