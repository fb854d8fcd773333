//! 帧同步
//!
//! 读取时间文件、扫描图像目录，生成每帧时间戳表和 RGB/深度/位姿 的帧配对。

use std::path::{Path, PathBuf};

use crate::error::{DatasetError, Result};
use crate::global_types::TIME_SCALE;

/// 每个 RGB 帧一个时间戳（微秒），单调不减
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimestampTable(Vec<f64>);

impl TimestampTable {
    pub fn new(timestamps: Vec<f64>) -> Result<Self> {
        if let Some(i) = timestamps.windows(2).position(|w| w[1] < w[0]) {
            return Err(DatasetError::Ordering { index: i + 1 });
        }
        Ok(Self(timestamps))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.0
            .get(index)
            .copied()
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    /// 从 `start` 开始的所有时间戳
    pub fn tail(&self, start: usize) -> Result<&[f64]> {
        if start > self.0.len() {
            return Err(DatasetError::IndexOutOfRange {
                index: start,
                len: self.0.len(),
            });
        }
        Ok(&self.0[start..])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairIndex {
    pub depth: usize,
    pub pose: usize,
}

/// 帧号 -> 深度/位姿 样本号，定义域为 `[0, N)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePairing(Vec<PairIndex>);

impl FramePairing {
    /// 各数据流已经一一对齐
    pub fn identity(len: usize) -> Self {
        Self((0..len).map(|i| PairIndex { depth: i, pose: i }).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<PairIndex> {
        self.0
            .get(index)
            .copied()
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairIndex> {
        self.0.iter()
    }
}

/// 同步结果，构造后只读
#[derive(Debug, Clone, Default)]
pub struct SyncedSequence {
    pub timestamps: TimestampTable,
    pub pairing: FramePairing,
    /// 按文件名字典序排列的图像路径，下标即帧号
    pub image_files: Vec<PathBuf>,
}

impl SyncedSequence {
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

/// 读取时间文件，每行一个秒为单位的浮点数，换算到微秒
pub fn read_time_file(path: &Path) -> Result<Vec<f64>> {
    if !path.is_file() {
        return Err(DatasetError::MissingFile(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .flexible(true)
        .from_path(path)?;

    let mut timestamps = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let field = match record.get(0) {
            Some(f) if !f.is_empty() => f,
            _ => continue,
        };
        let t = field.parse::<f64>().map_err(|e| {
            DatasetError::Parse(format!("{}:{}: {}", path.display(), line + 1, e))
        })?;
        if !t.is_finite() {
            return Err(DatasetError::Parse(format!(
                "{}:{}: non-finite timestamp {}",
                path.display(),
                line + 1,
                field
            )));
        }
        timestamps.push(t * TIME_SCALE);
    }
    Ok(timestamps)
}

/// 列出目录下扩展名为 `ext` 的文件并按文件名排序，跳过隐藏文件（如 `._000000.png`）
pub fn list_images(image_dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !image_dir.is_dir() {
        return Err(DatasetError::MissingFile(image_dir.to_path_buf()));
    }
    let ext = ext.trim_start_matches('.');
    let mut files = Vec::new();
    for entry in std::fs::read_dir(image_dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| n.starts_with('.'));
        if !hidden && path.is_file() && path.extension().map_or(false, |e| e == ext) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// 帧数以图像数量为准。时间文件更长时截断尾部，更短时报错。
pub fn synchronize(time_file: &Path, image_dir: &Path, ext: &str) -> Result<SyncedSequence> {
    let mut timestamps = read_time_file(time_file)?;
    let image_files = list_images(image_dir, ext)?;
    let len = image_files.len();

    if timestamps.len() < len {
        return Err(DatasetError::TimestampCount {
            timestamps: timestamps.len(),
            images: len,
        });
    }
    if timestamps.len() > len {
        log::warn!(
            "{} has {} entries, only the first {} are used",
            time_file.display(),
            timestamps.len(),
            len
        );
        timestamps.truncate(len);
    }

    log::info!("synchronized {} frames from {}", len, image_dir.display());
    Ok(SyncedSequence {
        timestamps: TimestampTable::new(timestamps)?,
        pairing: FramePairing::identity(len),
        image_files,
    })
}
