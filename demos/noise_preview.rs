//! Height-field preview
//!
//! Renders the terrain generator's normalized fractal field to a grayscale
//! PNG so parameter changes can be eyeballed without opening a window.
//!
//! Usage: `cargo run --example noise_preview [seed] [size]`
//! Writes `noise_preview.png` into the working directory.

use embervox::{OpenSimplexNoise, TerrainGenerator};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: i64 = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(1_234_567);
    let size: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(512);

    let generator = TerrainGenerator::new(OpenSimplexNoise::new(seed));
    let field = generator.height_field(Vec3::ZERO, size, size);

    let mut image = image::GrayImage::new(size, size);
    for (i, value) in field.iter().enumerate() {
        let x = (i as u32) % size;
        let y = (i as u32) / size;
        let level = (value * 255.0).round().clamp(0.0, 255.0) as u8;
        image.put_pixel(x, y, image::Luma([level]));
    }

    let path = "noise_preview.png";
    image.save(path)?;
    println!("Wrote {}x{} height field (seed {}) to {}", size, size, seed, path);

    Ok(())
}
