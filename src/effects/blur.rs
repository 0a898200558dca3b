use rayon::prelude::*;

use crate::foundation::error::{BannerError, BannerResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// Gaussian blur of a straight-alpha RGBA8 buffer where `radius` is the standard deviation.
///
/// Filtering happens on premultiplied values so transparent neighbours do not bleed their
/// (meaningless) color into visible pixels. `radius == 0` returns a copy. Any radius is accepted;
/// beyond the longer side of the buffer the result no longer changes, so sigma is capped there.
pub fn blur_rgba8(src: &[u8], width: u32, height: u32, radius: u32) -> BannerResult<Vec<u8>> {
    check_len(src, width, height, 4)?;
    if radius == 0 || src.is_empty() {
        return Ok(src.to_vec());
    }
    let kernel = kernel_for_radius(radius, width, height)?;

    let mut premul = src.to_vec();
    premultiply_rgba8_in_place(&mut premul);
    let mut out = separable_blur(&premul, width, height, 4, &kernel);
    unpremultiply_rgba8_in_place(&mut out);
    Ok(out)
}

/// Gaussian blur of a single-channel (gray or alpha) buffer.
pub fn blur_gray8(src: &[u8], width: u32, height: u32, radius: u32) -> BannerResult<Vec<u8>> {
    check_len(src, width, height, 1)?;
    if radius == 0 || src.is_empty() {
        return Ok(src.to_vec());
    }
    let kernel = kernel_for_radius(radius, width, height)?;
    Ok(separable_blur(src, width, height, 1, &kernel))
}

fn check_len(src: &[u8], width: u32, height: u32, channels: usize) -> BannerResult<()> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| BannerError::validation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(BannerError::validation(format!(
            "blur expects {expected_len} bytes for {width}x{height}x{channels}, got {}",
            src.len()
        )));
    }
    Ok(())
}

fn kernel_for_radius(radius: u32, width: u32, height: u32) -> BannerResult<Vec<u32>> {
    let sigma = radius.min(width.max(height)).max(1);
    // Three sigmas cover >99.7% of the mass.
    gaussian_kernel_q16(sigma.saturating_mul(3), sigma as f32)
}

pub(crate) fn gaussian_kernel_q16(half_width: u32, sigma: f32) -> BannerResult<Vec<u32>> {
    if half_width == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BannerError::validation("blur sigma must be finite and > 0"));
    }

    let r = half_width as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(BannerError::validation("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Put the rounding residue on the center tap so the weights sum to exactly 1.0 in q16.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn separable_blur(src: &[u8], width: u32, height: u32, channels: usize, k: &[u32]) -> Vec<u8> {
    let mut tmp = vec![0u8; src.len()];
    let mut out = vec![0u8; src.len()];
    horizontal_pass(src, &mut tmp, width, channels, k);
    vertical_pass(&tmp, &mut out, width, height, channels, k);
    out
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, channels: usize, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    let stride = width as usize * channels;
    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(d_row, s_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i64 - radius).clamp(0, w - 1) as usize;
                    let idx = sx * channels;
                    for c in 0..channels {
                        acc[c] += u64::from(kw) * u64::from(s_row[idx + c]);
                    }
                }
                let out_idx = x as usize * channels;
                for c in 0..channels {
                    d_row[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    channels: usize,
    k: &[u32],
) {
    let radius = (k.len() / 2) as i64;
    let h = i64::from(height);
    let stride = width as usize * channels;
    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, d_row)| {
            let mut acc = vec![0u64; stride];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - radius).clamp(0, h - 1) as usize;
                let s_row = &src[sy * stride..(sy + 1) * stride];
                for (a, &s) in acc.iter_mut().zip(s_row) {
                    *a += u64::from(kw) * u64::from(s);
                }
            }
            for (d, a) in d_row.iter_mut().zip(acc) {
                *d = q16_to_u8(a);
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
