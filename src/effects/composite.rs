use rayon::prelude::*;

use crate::foundation::error::{BannerError, BannerResult};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Source-over for straight alpha: `src` drawn on top of `dst`.
///
/// ```text
/// outA   = srcA + dstA * (1 - srcA/255)
/// outRGB = (srcRGB*srcA + dstRGB*dstA*(1 - srcA/255)) / outA
/// ```
///
/// A fully transparent `src` leaves `dst` untouched, including the color of a transparent `dst`.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let da = u32::from(dst[3]);
    let inv = 255 - sa;

    // Everything below is scaled by 255 to stay in integers; sa > 0 keeps it non-zero.
    let a255 = sa * 255 + da * inv;

    let mut out = [0u8; 4];
    out[3] = ((a255 + 127) / 255) as u8;
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * da * inv;
        out[i] = ((num + a255 / 2) / a255).min(255) as u8;
    }
    out
}

/// Composite `src` over `dst` in place, one rayon task per row of `row_px` pixels.
pub fn over_in_place(dst: &mut [u8], src: &[u8], row_px: usize) -> BannerResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BannerError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    let stride = row_px.max(1) * 4;
    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(d_row, s_row)| {
            for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
