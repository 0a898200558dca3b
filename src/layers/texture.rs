use rayon::prelude::*;

use crate::{
    composition::model::{TextureKind, TextureSpec},
    effects::blur::blur_gray8,
    foundation::canvas::Canvas,
    foundation::error::BannerResult,
    foundation::math::{hash_u32, opacity_to_alpha, unit_open},
};

pub(crate) const GRAIN_MEAN: f32 = 127.0;
pub(crate) const GRAIN_STDDEV: f32 = 20.0;
const PAPER_MIN: u8 = 200;
const PAPER_BLUR_RADIUS: u32 = 1;
// Decorrelates the second Box-Muller uniform from the first.
const GRAIN_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Single-channel luminance for `kind`, row-major, one byte per pixel.
pub fn generate_luminance(
    kind: TextureKind,
    width: u32,
    height: u32,
    seed: u64,
) -> BannerResult<Vec<u8>> {
    let mut lum = vec![0u8; (width as usize) * (height as usize)];
    if lum.is_empty() {
        return Ok(lum);
    }

    match kind {
        TextureKind::Noise => fill_rows(&mut lum, width, |x, y| {
            (hash_u32(seed, x, y) >> 24) as u8
        }),
        TextureKind::Grain => fill_rows(&mut lum, width, |x, y| {
            let u1 = unit_open(hash_u32(seed, x, y));
            let u2 = unit_open(hash_u32(seed ^ GRAIN_SALT, x, y));
            let z = (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos();
            (GRAIN_MEAN + GRAIN_STDDEV * z).round().clamp(0.0, 255.0) as u8
        }),
        TextureKind::Paper => {
            let span = u32::from(u8::MAX - PAPER_MIN) + 1;
            fill_rows(&mut lum, width, |x, y| {
                PAPER_MIN + (hash_u32(seed, x, y) % span) as u8
            });
            lum = blur_gray8(&lum, width, height, PAPER_BLUR_RADIUS)?;
        }
    }
    Ok(lum)
}

/// Build the RGBA texture layer: luminance replicated into RGB, uniform alpha from `opacity`.
pub fn build_texture(width: u32, height: u32, spec: &TextureSpec, seed: u64) -> BannerResult<Canvas> {
    let lum = generate_luminance(spec.kind, width, height, seed)?;
    let alpha = opacity_to_alpha(spec.opacity);

    let mut layer = Canvas::new(width, height);
    let row_px = width as usize;
    if row_px == 0 {
        return Ok(layer);
    }
    let stride = layer.stride();
    layer
        .as_bytes_mut()
        .par_chunks_mut(stride)
        .zip(lum.par_chunks(row_px))
        .for_each(|(dst, src)| {
            for (d, &l) in dst.chunks_exact_mut(4).zip(src) {
                d.copy_from_slice(&[l, l, l, alpha]);
            }
        });
    Ok(layer)
}

/// Composite a texture layer over `canvas`. `default_seed` is used when `spec.seed` is unset.
pub fn apply_texture(canvas: &mut Canvas, spec: &TextureSpec, default_seed: u64) -> BannerResult<()> {
    let seed = spec.seed.unwrap_or(default_seed);
    tracing::debug!(kind = spec.kind.name(), opacity = spec.opacity, seed, "texture layer");
    let layer = build_texture(canvas.width(), canvas.height(), spec, seed)?;
    debug_assert_eq!(layer.size(), canvas.size());
    canvas.composite_over(&layer)
}

fn fill_rows<F>(lum: &mut [u8], width: u32, sample: F)
where
    F: Fn(u32, u32) -> u8 + Sync,
{
    lum.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = sample(x as u32, y as u32);
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/layers/texture.rs"]
mod tests;
