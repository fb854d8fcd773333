use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CameraParametersTrait;
use crate::error::{DatasetError, Result};
use crate::global_types::INTRINSICS_FILE;

/// 针孔内参 `{cx, cy, fx, fy}`，每个序列读取一次
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicsParams {
    #[serde(rename = "Cx")]
    pub cx: f64,
    #[serde(rename = "Cy")]
    pub cy: f64,
    pub fx: f64,
    pub fy: f64,
}

impl IntrinsicsParams {
    /// `[cx, cy, fx, fy]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.cx, self.cy, self.fx, self.fy]
    }

    pub fn k_matrix(&self) -> nalgebra::Matrix3<f64> {
        nalgebra::Matrix3::new(
            self.fx, 0.0, self.cx, //
            0.0, self.fy, self.cy, //
            0.0, 0.0, 1.0,
        )
    }
}

impl CameraParametersTrait for IntrinsicsParams {
    const FILE_NAME: &'static str = INTRINSICS_FILE;

    fn read_from_json(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(Self::FILE_NAME);
        if !path.is_file() {
            return Err(DatasetError::MissingFile(path));
        }
        let bytes = std::fs::read(&path)?;
        let params: Self = serde_json::from_slice(&bytes)
            .map_err(|e| DatasetError::MissingKey(format!("{}: {}", path.display(), e)))?;
        log::info!(
            "intrinsics: cx={} cy={} fx={} fy={}",
            params.cx,
            params.cy,
            params.fx,
            params.fy
        );
        Ok(params)
    }

    fn write_to_json(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| DatasetError::Parse(e.to_string()))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_from_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(INTRINSICS_FILE),
            r#"{"Cx": 320.5, "Cy": 240.0, "fx": 500.0, "fy": 501.0, "k1": 0.1}"#,
        )
        .unwrap();

        let params = IntrinsicsParams::read_from_json(dir.path()).unwrap();
        assert_eq!(params.to_array(), [320.5, 240.0, 500.0, 501.0]);
        // 重复读取结果一致
        assert_eq!(params, IntrinsicsParams::read_from_json(dir.path()).unwrap());

        let k = params.k_matrix();
        assert_eq!(k[(0, 0)], 500.0);
        assert_eq!(k[(1, 2)], 240.0);
        assert_eq!(k[(2, 2)], 1.0);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let params = IntrinsicsParams {
            cx: 1.0,
            cy: 2.0,
            fx: 3.0,
            fy: 4.0,
        };
        params
            .write_to_json(&dir.path().join(INTRINSICS_FILE))
            .unwrap();
        let text = std::fs::read_to_string(dir.path().join(INTRINSICS_FILE)).unwrap();
        assert!(text.contains("\"Cx\""));
        assert_eq!(IntrinsicsParams::read_from_json(dir.path()).unwrap(), params);
    }

    #[test]
    fn missing_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(INTRINSICS_FILE),
            r#"{"Cx": 320.5, "Cy": 240.0, "fx": 500.0}"#,
        )
        .unwrap();
        assert!(matches!(
            IntrinsicsParams::read_from_json(dir.path()),
            Err(DatasetError::MissingKey(_))
        ));

        std::fs::write(dir.path().join(INTRINSICS_FILE), "Cx: 1").unwrap();
        assert!(matches!(
            IntrinsicsParams::read_from_json(dir.path()),
            Err(DatasetError::MissingKey(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INTRINSICS_FILE), b"\xff\xfe{}").unwrap();
        assert!(matches!(
            IntrinsicsParams::read_from_json(dir.path()),
            Err(DatasetError::MissingKey(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            IntrinsicsParams::read_from_json(dir.path()),
            Err(DatasetError::MissingFile(_))
        ));
    }
}
