use rayon::prelude::*;

use crate::{
    composition::model::{Direction, GradientSpec},
    foundation::canvas::Canvas,
    foundation::color::{Color, interpolate},
    foundation::error::BannerResult,
};

/// Build an opaque `width` x `height` gradient buffer.
///
/// The interpolation factor is `i / (n - 1)` along the gradient axis, with a single
/// row/column pinned to factor 0 (the start color).
pub fn build_gradient(width: u32, height: u32, spec: &GradientSpec) -> Canvas {
    let mut layer = Canvas::new(width, height);
    let stride = layer.stride();
    if stride == 0 {
        return layer;
    }

    match spec.direction {
        Direction::Horizontal => {
            // One row is enough; every row is a copy of it.
            let row: Vec<u8> = axis_colors(spec.start, spec.end, width)
                .into_iter()
                .flat_map(|c| c.with_alpha(255))
                .collect();
            layer
                .as_bytes_mut()
                .par_chunks_mut(stride)
                .for_each(|dst| dst.copy_from_slice(&row));
        }
        Direction::Vertical => {
            let colors = axis_colors(spec.start, spec.end, height);
            layer
                .as_bytes_mut()
                .par_chunks_mut(stride)
                .zip(colors.par_iter())
                .for_each(|(dst, c)| {
                    let px = c.with_alpha(255);
                    for d in dst.chunks_exact_mut(4) {
                        d.copy_from_slice(&px);
                    }
                });
        }
    }
    layer
}

/// Composite a gradient layer over `canvas`.
pub fn apply_gradient(canvas: &mut Canvas, spec: &GradientSpec) -> BannerResult<()> {
    tracing::debug!(
        start = %spec.start,
        end = %spec.end,
        direction = ?spec.direction,
        "gradient layer"
    );
    let layer = build_gradient(canvas.width(), canvas.height(), spec);
    debug_assert_eq!(layer.size(), canvas.size());
    canvas.composite_over(&layer)
}

fn axis_colors(start: Color, end: Color, n: u32) -> Vec<Color> {
    let last = n.saturating_sub(1);
    (0..n)
        .map(|i| {
            let t = if last == 0 {
                0.0
            } else {
                i as f32 / last as f32
            };
            interpolate(start, end, t)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layers/gradient.rs"]
mod tests;
