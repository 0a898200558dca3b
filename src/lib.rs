//! Bannerkit composites layered banner images on the CPU.
//!
//! A banner is produced by one [`StylePlan`]: an optional gradient, texture and overlay
//! composited in that order over a transparent canvas, followed by an ordered chain of effects.
//! Plans come from a [`StylePresetCatalog`] by name or are supplied directly.
//!
//! - Build a catalog with [`StylePresetCatalog::builtin`]
//! - Render with [`run`] or [`render_banner`]
//! - Read the pixels back from the returned [`Canvas`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Layer and effect descriptions.
pub mod composition;
/// Pixel effects and compositing primitives.
pub mod effects;
/// Procedural layer generators.
pub mod layers;
/// Named style plans.
pub mod presets;
/// The compositing pipeline.
pub mod render;

pub use crate::foundation::canvas::{CLEAR_PIXEL, Canvas};
pub use crate::foundation::color::{Color, interpolate, parse_hex};
pub use crate::foundation::error::{BannerError, BannerResult};

pub use crate::composition::model::{
    Direction, EffectSpec, GradientSpec, LayerSpec, OverlaySpec, StylePlan, TextureKind,
    TextureSpec,
};
pub use crate::presets::catalog::{StylePreset, StylePresetCatalog};
pub use crate::render::pipeline::{
    BannerRequest, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_SEED, PipelineOpts,
    RenderedBanner, StyleSource, render_banner, run,
};
