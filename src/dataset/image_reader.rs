//! 图像读取
//!
//! 默认使用 `image` crate 解码，启用 `opencv` feature 后改用 OpenCV。
//! 输出统一为 RGB，形状 (height, width, 3)。

use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::global_types::Image;

pub trait ImageReader: Send + Sync {
    /// 读取并缩放到 `height` x `width`
    fn read_image(&self, path: &Path, height: u32, width: u32) -> Result<Image>;
}

fn decode_error(path: &Path, reason: impl ToString) -> DatasetError {
    DatasetError::Decode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateReader;

impl ImageReader for ImageCrateReader {
    fn read_image(&self, path: &Path, height: u32, width: u32) -> Result<Image> {
        if !path.is_file() {
            return Err(DatasetError::MissingFile(path.to_path_buf()));
        }
        let img = image::open(path).map_err(|e| decode_error(path, e))?;
        let rgb = img
            .resize_exact(width, height, image::imageops::FilterType::Triangle)
            .to_rgb8();
        Image::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
            .map_err(|e| decode_error(path, e))
    }
}

#[cfg(feature = "opencv")]
pub use self::opencv_reader::OpenCvReader;

#[cfg(feature = "opencv")]
mod opencv_reader {
    use std::path::Path;

    use opencv::core::{Mat, MatTraitConst, MatTraitConstManual, Size};
    use opencv::{imgcodecs, imgproc};

    use super::{decode_error, ImageReader};
    use crate::error::{DatasetError, Result};
    use crate::global_types::Image;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct OpenCvReader;

    impl ImageReader for OpenCvReader {
        fn read_image(&self, path: &Path, height: u32, width: u32) -> Result<Image> {
            let path_str = path
                .to_str()
                .ok_or_else(|| decode_error(path, "non utf-8 path"))?;
            if !path.is_file() {
                return Err(DatasetError::MissingFile(path.to_path_buf()));
            }
            let bgr = imgcodecs::imread(path_str, imgcodecs::IMREAD_COLOR)
                .map_err(|e| decode_error(path, e))?;
            if bgr.empty() {
                return Err(decode_error(path, "empty image"));
            }

            let mut resized = Mat::default();
            imgproc::resize(
                &bgr,
                &mut resized,
                Size::new(width as i32, height as i32),
                0.0,
                0.0,
                imgproc::INTER_LINEAR,
            )
            .map_err(|e| decode_error(path, e))?;

            let mut rgb = Mat::default();
            imgproc::cvt_color(&resized, &mut rgb, imgproc::COLOR_BGR2RGB, 0)
                .map_err(|e| decode_error(path, e))?;

            let data = rgb.data_bytes().map_err(|e| decode_error(path, e))?;
            Image::from_shape_vec((height as usize, width as usize, 3), data.to_vec())
                .map_err(|e| decode_error(path, e))
        }
    }
}

/// 当前编译配置下的默认读取器
#[cfg(not(feature = "opencv"))]
pub fn default_reader() -> Box<dyn ImageReader> {
    Box::new(ImageCrateReader)
}

#[cfg(feature = "opencv")]
pub fn default_reader() -> Box<dyn ImageReader> {
    Box::new(OpenCvReader)
}
