//! AISG 驾驶序列
//!
//! 目录结构：
//! - `<img_seq_dir>/<seq>/train<digit>.time`
//! - `<img_seq_dir>/<seq>/train_images-<digit>/*.<ext>`
//! - `<config_dir>/intrinsic_parameters.json`
//!
//! 图像、深度、位姿已经一一对齐，帧配对为恒等映射。不提供深度。

use std::path::{Path, PathBuf};

use super::image_reader::{default_reader, ImageReader};
use super::layout::{sequence_suffix, DataDirectoryLayout};
use super::sync::{synchronize, FramePairing, SyncedSequence, TimestampTable};
use super::DatasetTrait;
use crate::camera::{CameraParametersTrait, IntrinsicsParams};
use crate::config::{DatasetConfig, ImageConfig};
use crate::error::{DatasetError, Result};
use crate::global_types::{Image, Pose};
use crate::save::{save_traj, TrajectoryFormat};

pub struct AisgDataset {
    seq: String,
    image: ImageConfig,
    start_frame: usize,
    data_dir: DataDirectoryLayout,
    intrinsics: IntrinsicsParams,
    synced: SyncedSequence,
    reader: Box<dyn ImageReader>,
}

impl AisgDataset {
    /// 依次解析目录、读取内参、同步帧，任何一步失败都直接返回错误
    pub fn new(cfg: DatasetConfig) -> Result<Self> {
        let data_dir = DataDirectoryLayout::from_config(&cfg)?;
        log::info!("image dir: {}", data_dir.image_dir.display());
        if let Some(depth_dir) = &data_dir.depth_dir {
            log::info!("depth dir: {}", depth_dir.display());
        }

        let intrinsics = IntrinsicsParams::read_from_json(&cfg.directory.config_dir)?;

        let time_file = Self::time_file(&cfg.directory.img_seq_dir, &cfg.seq)?;
        let synced = synchronize(&time_file, &data_dir.image_dir, &cfg.image.ext)?;

        Ok(Self {
            seq: cfg.seq,
            image: cfg.image,
            start_frame: cfg.start_frame,
            data_dir,
            intrinsics,
            synced,
            reader: default_reader(),
        })
    }

    /// 替换图像读取器
    pub fn with_image_reader(mut self, reader: Box<dyn ImageReader>) -> Self {
        self.reader = reader;
        self
    }

    /// `<img_seq_dir>/<seq>/train<digit>.time`
    pub fn time_file(img_seq_dir: &Path, seq: &str) -> Result<PathBuf> {
        let suffix = sequence_suffix(seq)?;
        Ok(img_seq_dir.join(seq).join(format!("train{}.time", suffix)))
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }

    pub fn start_frame(&self) -> usize {
        self.start_frame
    }

    /// 第 `index` 帧对应的图像文件
    pub fn image_path(&self, index: usize) -> Result<&Path> {
        self.synced
            .image_files
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.synced.len(),
            })
    }
}

impl DatasetTrait for AisgDataset {
    fn len(&self) -> usize {
        self.synced.len()
    }

    fn get_timestamp(&self, index: usize) -> Result<f64> {
        self.synced.timestamps.get(index)
    }

    fn get_image(&self, index: usize) -> Result<Image> {
        let path = self.image_path(index)?;
        log::debug!("frame {}: {}", index, path.display());
        self.reader
            .read_image(path, self.image.height, self.image.width)
    }

    fn get_intrinsics_param(&self) -> &IntrinsicsParams {
        &self.intrinsics
    }

    fn get_data_dir(&self) -> &DataDirectoryLayout {
        &self.data_dir
    }

    fn frame_pairing(&self) -> &FramePairing {
        &self.synced.pairing
    }

    fn timestamps(&self) -> &TimestampTable {
        &self.synced.timestamps
    }

    fn save_result_traj(&self, path: &Path, poses: &[Pose]) -> Result<()> {
        let timestamps = self.synced.timestamps.tail(self.start_frame)?;
        save_traj(path, poses, timestamps, TrajectoryFormat::Robotcar)
    }
}
