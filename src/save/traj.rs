//! 轨迹保存
//!
//! 只做格式转换，不修改位姿数值。

use std::path::Path;
use std::str::FromStr;

use crate::error::{DatasetError, Result};
use crate::global_types::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryFormat {
    /// 每行 3x4 矩阵的 12 个元素，无时间戳
    Kitti,
    /// `timestamp tx ty tz qx qy qz qw`
    Tum,
    /// 时间戳 + 4x4 矩阵按行展开的 16 个元素
    Robotcar,
}

impl FromStr for TrajectoryFormat {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kitti" => Ok(Self::Kitti),
            "tum" => Ok(Self::Tum),
            "robotcar" => Ok(Self::Robotcar),
            other => Err(DatasetError::Config(format!(
                "unknown trajectory format [{}]",
                other
            ))),
        }
    }
}

fn row_major(pose: &Pose, rows: usize) -> impl Iterator<Item = f64> + '_ {
    (0..rows).flat_map(move |r| (0..4).map(move |c| pose[(r, c)]))
}

impl TrajectoryFormat {
    fn record(&self, timestamp: f64, pose: &Pose) -> Vec<String> {
        match self {
            Self::Kitti => row_major(pose, 3).map(|v| v.to_string()).collect(),
            Self::Tum => {
                let rot = nalgebra::Rotation3::from_matrix(&pose.fixed_view::<3, 3>(0, 0).into_owned());
                let q = nalgebra::UnitQuaternion::from_rotation_matrix(&rot);
                let t = pose.fixed_view::<3, 1>(0, 3);
                [timestamp, t[0], t[1], t[2], q.i, q.j, q.k, q.w]
                    .iter()
                    .map(|v| v.to_string())
                    .collect()
            }
            Self::Robotcar => std::iter::once(timestamp)
                .chain(row_major(pose, 4))
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

/// 保存轨迹，位姿和时间戳数量必须一致，否则不写文件
pub fn save_traj(
    path: &Path,
    poses: &[Pose],
    timestamps: &[f64],
    format: TrajectoryFormat,
) -> Result<()> {
    if poses.len() != timestamps.len() {
        return Err(DatasetError::LengthMismatch {
            poses: poses.len(),
            timestamps: timestamps.len(),
        });
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(Vec::new());
    for (pose, &timestamp) in poses.iter().zip(timestamps) {
        writer.write_record(format.record(timestamp, pose))?;
    }
    let buf = writer
        .into_inner()
        .map_err(|e| DatasetError::Io(e.into_error()))?;

    std::fs::write(path, buf)?;
    log::info!(
        "saved {} poses as {:?} to {}",
        poses.len(),
        format,
        path.display()
    );
    Ok(())
}
