use rayon::prelude::*;

use crate::{
    composition::model::EffectSpec,
    effects::blur::{blur_gray8, blur_rgba8},
    foundation::canvas::Canvas,
    foundation::color::Color,
    foundation::error::BannerResult,
};

/// Apply `effects` to `canvas` strictly in the given order.
pub fn apply_effects(canvas: &mut Canvas, effects: &[EffectSpec]) -> BannerResult<()> {
    for effect in effects {
        apply_effect(canvas, effect)?;
    }
    Ok(())
}

/// Apply one effect to the whole canvas.
pub fn apply_effect(canvas: &mut Canvas, effect: &EffectSpec) -> BannerResult<()> {
    tracing::debug!(effect = ?effect, "effect");
    match *effect {
        EffectSpec::Blur { radius } => apply_blur(canvas, radius),
        EffectSpec::Shadow {
            offset,
            color,
            blur_radius,
        } => apply_shadow(canvas, offset, color, blur_radius),
        EffectSpec::Border { width, color } => {
            apply_border(canvas, width, color);
            Ok(())
        }
        EffectSpec::Glow { spread, intensity } => apply_glow(canvas, spread, intensity),
    }
}

fn apply_blur(canvas: &mut Canvas, radius: u32) -> BannerResult<()> {
    if radius == 0 {
        return Ok(());
    }
    let (w, h) = canvas.size();
    let out = blur_rgba8(canvas.as_bytes(), w, h, radius)?;
    *canvas = Canvas::from_raw(w, h, out)?;
    Ok(())
}

/// Shift the canvas alpha by `offset`, blur it, tint it `color` and put it underneath.
fn apply_shadow(
    canvas: &mut Canvas,
    offset: (i32, i32),
    color: Color,
    blur_radius: u32,
) -> BannerResult<()> {
    let (w, h) = canvas.size();
    let mask = shifted_alpha(canvas, offset);
    let mask = blur_gray8(&mask, w, h, blur_radius)?;

    let mut shadow = Canvas::filled(w, h, [0, 0, 0, 0]);
    let stride = shadow.stride();
    if stride > 0 {
        shadow
            .as_bytes_mut()
            .par_chunks_mut(stride)
            .zip(mask.par_chunks(w as usize))
            .for_each(|(dst, alphas)| {
                for (d, &a) in dst.chunks_exact_mut(4).zip(alphas) {
                    if a != 0 {
                        d.copy_from_slice(&color.with_alpha(a));
                    }
                }
            });
    }

    let mut out = Canvas::filled(w, h, [0, 0, 0, 0]);
    out.composite_over(&shadow)?;
    out.composite_over(canvas)?;
    *canvas = out;
    Ok(())
}

fn shifted_alpha(canvas: &Canvas, (dx, dy): (i32, i32)) -> Vec<u8> {
    let (w, h) = canvas.size();
    let mut mask = vec![0u8; (w as usize) * (h as usize)];
    if mask.is_empty() {
        return mask;
    }
    let src = canvas.as_bytes();
    let (wi, hi) = (i64::from(w), i64::from(h));
    mask.par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let sy = y as i64 - i64::from(dy);
            if !(0..hi).contains(&sy) {
                return;
            }
            for (x, m) in row.iter_mut().enumerate() {
                let sx = x as i64 - i64::from(dx);
                if (0..wi).contains(&sx) {
                    *m = src[((sy * wi + sx) as usize) * 4 + 3];
                }
            }
        });
    mask
}

/// Opaque `width`-pixel outline drawn straight into the canvas, clipped to its bounds.
fn apply_border(canvas: &mut Canvas, width: u32, color: Color) {
    if width == 0 {
        return;
    }
    let (w, h) = canvas.size();
    let px = color.with_alpha(255);
    let stride = canvas.stride();
    if stride == 0 {
        return;
    }
    let bw = width as usize;
    let (wu, hu) = (w as usize, h as usize);
    canvas
        .as_bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let full_row = y < bw || y + bw >= hu;
            for (x, d) in row.chunks_exact_mut(4).enumerate() {
                if full_row || x < bw || x + bw >= wu {
                    d.copy_from_slice(&px);
                }
            }
        });
}

/// Blur a copy by `spread`, scale its RGB by `intensity`, and composite the original on top.
fn apply_glow(canvas: &mut Canvas, spread: u32, intensity: f32) -> BannerResult<()> {
    let (w, h) = canvas.size();
    let mut glow = blur_rgba8(canvas.as_bytes(), w, h, spread)?;
    let k = intensity.clamp(0.0, 1.0);
    glow.par_chunks_mut(4).for_each(|p| {
        for c in &mut p[..3] {
            *c = (f32::from(*c) * k).round().clamp(0.0, 255.0) as u8;
        }
    });

    let mut out = Canvas::from_raw(w, h, glow)?;
    out.composite_over(canvas)?;
    *canvas = out;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fx.rs"]
mod tests;
