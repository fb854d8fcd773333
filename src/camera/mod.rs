//! 相机内参
//!
//! 针孔模型，只保存主点和焦距，投影计算不在本库范围内。

mod pinhole_camera;
pub use pinhole_camera::IntrinsicsParams;

use std::path::Path;

use crate::error::Result;

/// 相机参数的trait
pub trait CameraParametersTrait: Sized {
    /// 参数文件名，位于配置目录下
    const FILE_NAME: &'static str;
    fn read_from_json(config_dir: &Path) -> Result<Self>;
    fn write_to_json(&self, path: &Path) -> Result<()>;
}
