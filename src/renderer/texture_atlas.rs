//! Procedural texture atlas
//!
//! The sandbox carries no image assets; the block atlas is generated at
//! startup. Layout follows the atlas addressing convention: a square
//! texture, 16 tiles per row, every face UV addressed as tile base + cell
//! offset. Generation is seeded, so a given world seed always produces the
//! same texture.

use crate::constants::atlas::{TEXTURE_SIZE, TILES_PER_ROW};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pixels per atlas axis.
pub const ATLAS_PIXELS: u32 = TEXTURE_SIZE as u32;

/// Pixels per tile axis.
const TILE_PIXELS: u32 = (TEXTURE_SIZE / TILES_PER_ROW) as u32;

/// Base colors cycled across tiles, earthy tones first so the default
/// terrain tile lands on dirt brown.
const TILE_PALETTE: [[u8; 3]; 8] = [
    [121, 85, 58],  // dirt
    [96, 128, 56],  // grass
    [112, 112, 112],// stone
    [133, 94, 66],  // wood
    [104, 76, 50],
    [88, 110, 52],
    [98, 98, 98],
    [140, 102, 70],
];

/// Generate the RGBA atlas pixels, row-major from the top-left.
pub fn generate_atlas_pixels(seed: i64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let size = ATLAS_PIXELS as usize;
    let mut pixels = vec![0u8; size * size * 4];

    let tiles = (TILES_PER_ROW as u32) as usize;
    for tile_y in 0..tiles {
        for tile_x in 0..tiles {
            let base = TILE_PALETTE[(tile_y * tiles + tile_x) % TILE_PALETTE.len()];
            fill_tile(&mut pixels, size, tile_x, tile_y, base, &mut rng);
        }
    }

    pixels
}

/// Fill one tile with its base color plus per-pixel speckle and a darkened
/// one-pixel border so tile seams are visible while debugging UVs.
fn fill_tile(
    pixels: &mut [u8],
    row_pixels: usize,
    tile_x: usize,
    tile_y: usize,
    base: [u8; 3],
    rng: &mut StdRng,
) {
    let tile = TILE_PIXELS as usize;
    let x0 = tile_x * tile;
    let y0 = tile_y * tile;

    for y in 0..tile {
        for x in 0..tile {
            let speckle: i16 = rng.gen_range(-12..=12);
            let border = x == 0 || y == 0 || x == tile - 1 || y == tile - 1;

            let offset = ((y0 + y) * row_pixels + (x0 + x)) * 4;
            for channel in 0..3 {
                let mut value = base[channel] as i16 + speckle;
                if border {
                    value -= 24;
                }
                pixels[offset + channel] = value.clamp(0, 255) as u8;
            }
            pixels[offset + 3] = 255;
        }
    }
}

/// Create and upload the atlas texture, returning its view and sampler.
pub fn create_atlas_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    seed: i64,
) -> (wgpu::TextureView, wgpu::Sampler) {
    let pixels = generate_atlas_pixels(seed);

    let size = wgpu::Extent3d {
        width: ATLAS_PIXELS,
        height: ATLAS_PIXELS,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("block-atlas"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * ATLAS_PIXELS),
            rows_per_image: Some(ATLAS_PIXELS),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("block-atlas-sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    (view, sampler)
}
