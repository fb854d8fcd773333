//! 结果保存

mod traj;
pub use traj::{save_traj, TrajectoryFormat};
