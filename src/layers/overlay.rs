use crate::{
    composition::model::OverlaySpec,
    foundation::canvas::Canvas,
    foundation::error::BannerResult,
    foundation::math::opacity_to_alpha,
};

/// Flat `color` at `round(255 * opacity)` alpha, canvas-sized.
pub fn build_overlay(width: u32, height: u32, spec: &OverlaySpec) -> Canvas {
    Canvas::filled(width, height, spec.color.with_alpha(opacity_to_alpha(spec.opacity)))
}

/// Composite a flat-color overlay over `canvas`.
pub fn apply_overlay(canvas: &mut Canvas, spec: &OverlaySpec) -> BannerResult<()> {
    tracing::debug!(color = %spec.color, opacity = spec.opacity, "overlay layer");
    let layer = build_overlay(canvas.width(), canvas.height(), spec);
    canvas.composite_over(&layer)
}

#[cfg(test)]
#[path = "../../tests/unit/layers/overlay.rs"]
mod tests;
