/// Two-stop linear gradients.
pub mod gradient;
/// Flat translucent color overlays.
pub mod overlay;
/// Seeded procedural textures.
pub mod texture;

use crate::{
    composition::model::LayerSpec, foundation::canvas::Canvas, foundation::error::BannerResult,
};

/// Generate `layer` at canvas size and composite it over `canvas`.
pub fn apply_layer(canvas: &mut Canvas, layer: &LayerSpec, seed: u64) -> BannerResult<()> {
    match layer {
        LayerSpec::Gradient(spec) => gradient::apply_gradient(canvas, spec),
        LayerSpec::Texture(spec) => texture::apply_texture(canvas, spec, seed),
        LayerSpec::Overlay(spec) => overlay::apply_overlay(canvas, spec),
    }
}
