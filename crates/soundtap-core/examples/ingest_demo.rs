//! Ingestion demo: feed synthetic capture blocks through every input mode.
//!
//! Run with: RUST_LOG=debug cargo run -p soundtap-core --features tracing --example ingest_demo

use soundtap_core::{InputMode, SampleHistory};
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: f32 = 48000.0;
const CHANNELS: usize = 2;
const BLOCK_FRAMES: usize = 256;
const FFT_SIZE: usize = 1024;

/// One interleaved stereo block: 440 Hz on the left, 880 Hz on the right.
fn capture_block(start_frame: usize) -> Vec<f32> {
    let mut block = Vec::with_capacity(BLOCK_FRAMES * CHANNELS);
    for n in start_frame..start_frame + BLOCK_FRAMES {
        let t = n as f32 / SAMPLE_RATE;
        block.push((std::f32::consts::TAU * 440.0 * t).sin() * 0.5);
        block.push((std::f32::consts::TAU * 880.0 * t).sin() * 0.25);
    }
    block
}

fn rms(samples: impl Iterator<Item = f32>) -> f32 {
    let (sum, count) = samples.fold((0.0f32, 0usize), |(s, c), x| (s + x * x, c + 1));
    if count == 0 { 0.0 } else { (sum / count as f32).sqrt() }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut history = SampleHistory::new(FFT_SIZE);
    let mut frame = 0;

    println!("=== SampleHistory, capacity {FFT_SIZE} ===\n");
    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>10}",
        "Mode", "Put", "Len", "RMS L", "RMS R"
    );
    println!("{:-<8} {:->10} {:->10} {:->10} {:->10}", "", "", "", "", "");

    for mode in InputMode::ALL {
        history.set_input_mode(mode);
        let seen = history.num_put_samples();

        for _ in 0..4 {
            let mut block = capture_block(frame);
            history.put_samples(&mut block, CHANNELS);
            frame += BLOCK_FRAMES;
        }

        tracing::info!(
            mode = %mode,
            new_samples = history.samples_since(seen),
            "ingested blocks"
        );

        println!(
            "{:<8} {:>10} {:>10} {:>10.4} {:>10.4}",
            history.input_type(),
            history.num_put_samples(),
            history.len(),
            rms(history.left().iter()),
            rms(history.right().iter()),
        );
    }

    // Analyzer side: copy the newest window out
    let mut window = vec![0.0f32; FFT_SIZE];
    let copied = history.left().copy_latest(&mut window);
    println!("\nCopied {copied} samples for analysis");
}
