//! 测试工具：在临时目录中构造 AISG 序列

use std::path::{Path, PathBuf};

use crate::config::{DatasetConfig, DepthConfig, DirectoryConfig, ImageConfig};
use crate::error::Result;
use crate::global_types::{Image, INTRINSICS_FILE, TIME_SCALE};
use crate::dataset::ImageReader;

pub const BASE_TIME: f64 = 1_688_000_000.0;

/// 每行一个秒级时间戳：start, start + 1, ...
pub fn write_time_file(path: &Path, len: usize, start: f64) {
    let text: String = (0..len).map(|i| format!("{}\n", start + i as f64)).collect();
    std::fs::write(path, text).unwrap();
}

/// 创建 `000000.<ext>` 起的空文件
pub fn touch_images(dir: &Path, len: usize, ext: &str) {
    for i in 0..len {
        std::fs::write(dir.join(format!("{:06}.{}", i, ext)), b"").unwrap();
    }
}

pub struct AisgFixture {
    dir: tempfile::TempDir,
    seq: String,
}

impl AisgFixture {
    pub fn new(seq: &str, len: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let suffix = seq.chars().last().unwrap();

        let seq_dir = dir.path().join(seq);
        let image_dir = seq_dir.join(format!("train_images-{}", suffix));
        std::fs::create_dir_all(&image_dir).unwrap();
        touch_images(&image_dir, len, "png");
        write_time_file(&seq_dir.join(format!("train{}.time", suffix)), len, BASE_TIME);

        let config_dir = dir.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(INTRINSICS_FILE),
            r#"{"Cx": 640.0, "Cy": 360.0, "fx": 1000.0, "fy": 1000.0}"#,
        )
        .unwrap();

        Self {
            dir,
            seq: seq.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn height(&self) -> u32 {
        4
    }

    pub fn width(&self) -> u32 {
        6
    }

    pub fn config(&self) -> DatasetConfig {
        DatasetConfig {
            dataset: "aisg".into(),
            seq: self.seq.clone(),
            start_frame: 0,
            directory: DirectoryConfig {
                img_seq_dir: self.root().to_path_buf(),
                config_dir: self.root().join("config"),
                depth_dir: None,
            },
            image: ImageConfig {
                height: self.height(),
                width: self.width(),
                ext: "png".into(),
            },
            depth: DepthConfig::default(),
        }
    }

    /// 第 `index` 帧的期望时间戳（微秒）
    pub fn timestamp(&self, index: usize) -> f64 {
        (BASE_TIME + index as f64) * TIME_SCALE
    }

    pub fn image_path(&self, index: usize) -> PathBuf {
        let suffix = self.seq.chars().last().unwrap();
        self.root()
            .join(&self.seq)
            .join(format!("train_images-{}", suffix))
            .join(format!("{:06}.png", index))
    }
}

/// 不解码，返回全零图像，第一个像素写入文件名编号
pub struct PathEchoReader;

impl PathEchoReader {
    pub fn tag(path: &Path) -> u8 {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("0");
        (stem.parse::<usize>().unwrap_or(0) % 256) as u8
    }
}

impl ImageReader for PathEchoReader {
    fn read_image(&self, path: &Path, height: u32, width: u32) -> Result<Image> {
        let mut img = Image::zeros((height as usize, width as usize, 3));
        img[[0, 0, 0]] = Self::tag(path);
        Ok(img)
    }
}
