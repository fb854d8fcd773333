/// 4x4 齐次位姿矩阵，由外部估计器给出
pub type Pose = nalgebra::Matrix4<f64>;

/// RGB 图像，形状 (height, width, 3)
pub type Image = ndarray::Array3<u8>;

/// 深度图，形状 (height, width)
pub type Depth = ndarray::Array2<f32>;

/// 时间文件原始单位（秒）到微秒
pub const TIME_SCALE: f64 = 1e6;

/// 内参文件名，位于 `directory.config_dir` 下
pub const INTRINSICS_FILE: &str = "intrinsic_parameters.json";

#[test]
fn test_time_scale() {
    let t = 1.5 * TIME_SCALE;
    assert_eq!(t, 1_500_000.0);
}
