//! 用法：vo-dataset <config.json> [frame_index]
//!
//! 读取配置，加载数据集并打印序列信息，解码一帧图像检查数据是否完整。

use anyhow::Context;
use vo_dataset::{Dataset, DatasetConfig, DatasetTrait};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_nanos()
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .context("usage: vo-dataset <config.json> [frame_index]")?;
    let frame_index: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad frame index: {}", s))?,
        None => 0,
    };

    let cfg = DatasetConfig::from_json_file(&config_path)?;
    let dataset = Dataset::load(cfg).with_context(|| format!("loading {}", config_path))?;

    let data_dir = dataset.get_data_dir();
    log::info!("dataset: {}", dataset.kind());
    log::info!("frames: {}", dataset.len());
    log::info!("image dir: {:?}", data_dir.image_dir);
    log::info!(
        "depth: {:?} {:?}",
        data_dir.depth_source.map(|s| s.as_str()),
        data_dir.depth_dir
    );
    log::info!("intrinsics [cx, cy, fx, fy]: {:?}", dataset.get_intrinsics_param().to_array());

    if dataset.is_empty() {
        log::warn!("no frames found");
        return Ok(());
    }
    let timestamp = dataset.get_timestamp(frame_index)?;
    let img = dataset.get_image(frame_index)?;
    log::info!(
        "frame {} @ {}: shape {:?}",
        frame_index,
        timestamp,
        img.shape()
    );
    Ok(())
}
