//! 数据目录解析，只拼接路径，不访问文件系统。

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::DatasetConfig;
use crate::error::{DatasetError, Result};

/// 深度数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthSource {
    /// 真值深度
    Gt,
}

impl DepthSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepthSource::Gt => "gt",
        }
    }

    /// 解析深度策略，`None` 表示没有深度数据
    pub fn parse_policy(policy: Option<&str>) -> Result<Option<Self>> {
        policy.map(Self::from_str).transpose()
    }
}

impl FromStr for DepthSource {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gt" => Ok(DepthSource::Gt),
            other => Err(DatasetError::Config(format!(
                "Wrong depth src [{}] is given.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectoryLayout {
    pub image_dir: PathBuf,
    pub depth_dir: Option<PathBuf>,
    pub depth_source: Option<DepthSource>,
}

/// 序列名最后一位数字，例如 "seq5" -> '5'
pub fn sequence_suffix(seq: &str) -> Result<char> {
    match seq.chars().last() {
        Some(c) if c.is_ascii_digit() => Ok(c),
        _ => Err(DatasetError::Config(format!(
            "sequence id [{}] must end with a digit",
            seq
        ))),
    }
}

/// `<depth_root>/gt/<seq>/`
pub fn gt_depth_dir(depth_root: &Path, seq: &str) -> PathBuf {
    depth_root.join("gt").join(seq).join("")
}

impl DataDirectoryLayout {
    /// AISG 目录结构：`<img_seq_dir>/<seq>/train_images-<digit>/`
    pub fn resolve(
        img_seq_dir: &Path,
        depth_root: Option<&Path>,
        seq: &str,
        depth_policy: Option<&str>,
    ) -> Result<Self> {
        // 先检查深度策略，保证在读取任何帧之前失败
        let depth_source = DepthSource::parse_policy(depth_policy)?;
        let suffix = sequence_suffix(seq)?;
        let image_dir = img_seq_dir
            .join(seq)
            .join(format!("train_images-{}", suffix));

        let depth_dir = match depth_source {
            Some(DepthSource::Gt) => {
                let root = depth_root.ok_or_else(|| {
                    DatasetError::Config("depth_src is gt but directory.depth_dir is not set".into())
                })?;
                Some(gt_depth_dir(root, seq))
            }
            None => None,
        };

        Ok(Self {
            image_dir,
            depth_dir,
            depth_source,
        })
    }

    pub fn from_config(cfg: &DatasetConfig) -> Result<Self> {
        Self::resolve(
            &cfg.directory.img_seq_dir,
            cfg.directory.depth_dir.as_deref(),
            &cfg.seq,
            cfg.depth.depth_src.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_depth() {
        let layout =
            DataDirectoryLayout::resolve(Path::new("/data/aisg"), None, "seq5", None).unwrap();
        assert_eq!(
            layout.image_dir,
            PathBuf::from("/data/aisg/seq5/train_images-5")
        );
        assert!(layout.depth_dir.is_none());
        assert!(layout.depth_source.is_none());
    }

    #[test]
    fn test_gt_depth() {
        let layout = DataDirectoryLayout::resolve(
            Path::new("/data/aisg"),
            Some(Path::new("/data/depth")),
            "seq2",
            Some("gt"),
        )
        .unwrap();
        assert_eq!(layout.depth_source, Some(DepthSource::Gt));
        let depth_dir = layout.depth_dir.unwrap();
        assert_eq!(depth_dir, PathBuf::from("/data/depth/gt/seq2/"));
        assert!(depth_dir.to_string_lossy().ends_with('/'));
    }

    #[test]
    fn test_wrong_depth_src() {
        for policy in ["pred", "GT", ""] {
            let res = DataDirectoryLayout::resolve(
                Path::new("/data/aisg"),
                Some(Path::new("/data/depth")),
                "seq5",
                Some(policy),
            );
            assert!(matches!(res, Err(DatasetError::Config(_))), "{}", policy);
        }
    }

    #[test]
    fn test_gt_without_root() {
        let res = DataDirectoryLayout::resolve(Path::new("/d"), None, "seq5", Some("gt"));
        assert!(matches!(res, Err(DatasetError::Config(_))));
    }

    #[test]
    fn test_sequence_suffix() {
        assert_eq!(sequence_suffix("seq5").unwrap(), '5');
        assert!(sequence_suffix("seq").is_err());
        assert!(sequence_suffix("").is_err());
    }
}
