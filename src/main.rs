// Trains the pixel classifier on image frames and reports each step.
//
//   ferrite-mlp <frames-dir> [config.json]
//
// frame-0.png .. frame-13.png are trained on, frame-14.png is only propagated.
// Set FERRITE_MLP_ZERO_TARGET=1 to train every frame toward the zero vector.
use std::path::Path;

use anyhow::{bail, Context};
use log::info;

use ferrite_mlp::data::{black_pixel_count, frame_path, load_frame, pixel_count_target};
use ferrite_mlp::{Network, NetworkConfig};

const TRAIN_FRAMES: usize = 14;
const TEST_FRAME: usize = 14;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(frames_dir) = args.next() else {
        bail!("usage: ferrite-mlp <frames-dir> [config.json]");
    };
    let config = match args.next() {
        Some(path) => NetworkConfig::load_json(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => NetworkConfig::default(),
    };
    let zero_target = std::env::var("FERRITE_MLP_ZERO_TARGET").is_ok_and(|v| v == "1");

    let mut network = Network::from_config(&config).context("building network")?;
    info!(
        "training {}-{}-{} network on {TRAIN_FRAMES} frames from {frames_dir}",
        config.input_size, config.hidden_size, config.output_size
    );

    let dir = Path::new(&frames_dir);
    for index in 0..TRAIN_FRAMES {
        let path = frame_path(dir, index);
        let sample = load_frame(&path).with_context(|| format!("reading {}", path.display()))?;
        let target = if zero_target {
            vec![0.0; config.output_size]
        } else {
            pixel_count_target(&sample, config.output_size)
        };

        network
            .forward(&sample)
            .with_context(|| format!("propagating {}", path.display()))?;
        network.train_step(&target)?;
        println!("{}", network.snapshot());
    }

    let path = frame_path(dir, TEST_FRAME);
    let sample = load_frame(&path).with_context(|| format!("reading {}", path.display()))?;
    network
        .forward(&sample)
        .with_context(|| format!("propagating {}", path.display()))?;

    println!(">>> TEST PHASE <<<");
    println!("{}", network.snapshot());
    println!("Desired output: {:b}", black_pixel_count(&sample));
    Ok(())
}
