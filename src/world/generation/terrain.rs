//! Fractal height-map terrain generator
//!
//! Samples multi-octave noise once per horizontal column to decide a ground
//! height, then fills the column: solid at or below the height, air above.
//! Generation is deterministic for a given (seed, parameters, origin).

use super::NoiseSource;
use crate::constants::core::CHUNK_SIZE;
use crate::constants::terrain::{
    DEFAULT_AMPLITUDE, DEFAULT_FREQUENCY, DEFAULT_OCTAVES, MAX_COLUMN_HEIGHT,
};
use crate::world::core::{BlockType, Chunk};
use glam::Vec3;

/// Procedural chunk generator over a [`NoiseSource`].
#[derive(Debug, Clone)]
pub struct TerrainGenerator<N: NoiseSource> {
    noise: N,
    octaves: u32,
    frequency: f32,
    amplitude: f32,
}

impl<N: NoiseSource> TerrainGenerator<N> {
    /// Create a generator with the default fractal parameters
    /// (6 octaves, base frequency 0.25, base amplitude 0.5).
    pub fn new(noise: N) -> Self {
        Self::with_params(noise, DEFAULT_OCTAVES, DEFAULT_FREQUENCY, DEFAULT_AMPLITUDE)
    }

    /// Create a generator with explicit fractal parameters.
    pub fn with_params(noise: N, octaves: u32, frequency: f32, amplitude: f32) -> Self {
        Self {
            noise,
            octaves,
            frequency,
            amplitude,
        }
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Generate the chunk anchored at `world_origin`.
    ///
    /// Every column (x, z) gets a ground height from the fractal field;
    /// blocks at or below that height become `Dirt`, the rest stay `Air`.
    pub fn generate(&self, world_origin: Vec3) -> Chunk {
        let mut chunk = Chunk::new(world_origin);
        let size = chunk.size();
        let mut solid = 0u32;

        for x in 0..size {
            for z in 0..size {
                let wx = world_origin.x + x as f32;
                let wz = world_origin.z + z as f32;
                let height = self.column_height(wx, wz);

                for y in 0..size {
                    if world_origin.y + y as f32 <= height {
                        chunk.set(x, y, z, BlockType::Dirt);
                        solid += 1;
                    }
                }
            }
        }

        log::debug!(
            "[TerrainGenerator::generate] origin={:?} solid_blocks={}",
            world_origin,
            solid
        );
        chunk
    }

    /// Ground height for the column at world coordinate (wx, wz), in
    /// [0, MAX_COLUMN_HEIGHT], rounded to the nearest whole block.
    pub fn column_height(&self, wx: f32, wz: f32) -> f32 {
        (self.normalized_height(wx, wz) * MAX_COLUMN_HEIGHT).round()
    }

    /// The fractal field value for a column, normalized to [0, 1].
    ///
    /// Standard fBm accumulation: each octave samples the noise at a scaled
    /// coordinate, is clamped to [-1, 1], and is weighted by an amplitude
    /// that halves while the frequency doubles.
    pub fn normalized_height(&self, wx: f32, wz: f32) -> f32 {
        let sx = 1.0 / (CHUNK_SIZE as f32 * 0.5);
        let sz = 1.0 / (CHUNK_SIZE as f32 * 0.5);

        let mut frequency = self.frequency;
        let mut amplitude = self.amplitude;
        let mut total = 0.0f32;

        for _ in 0..self.octaves {
            let mx = wx * frequency;
            let mz = wz * frequency;
            let sample = self.noise.sample_2d((mx * sx) as f64, (mz * sz) as f64) as f32;

            total += sample.clamp(-1.0, 1.0) * amplitude;

            frequency *= 2.0;
            amplitude /= 2.0;
        }

        (total + 1.0) / 2.0
    }

    /// Sample the normalized fractal field over a `width` x `depth` grid of
    /// columns starting at `origin`, row-major by z. Feeds the height-field
    /// preview demo.
    pub fn height_field(&self, origin: Vec3, width: u32, depth: u32) -> Vec<f32> {
        let mut field = Vec::with_capacity((width * depth) as usize);
        for z in 0..depth {
            for x in 0..width {
                field.push(self.normalized_height(origin.x + x as f32, origin.z + z as f32));
            }
        }
        field
    }
}
