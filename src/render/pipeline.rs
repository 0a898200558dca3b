use crate::{
    composition::model::StylePlan,
    effects::fx::apply_effects,
    foundation::canvas::Canvas,
    foundation::error::{BannerError, BannerResult},
    layers::apply_layer,
    presets::catalog::StylePresetCatalog,
};

/// Largest width accepted by default.
pub const DEFAULT_MAX_WIDTH: u32 = 4000;
/// Largest height accepted by default.
pub const DEFAULT_MAX_HEIGHT: u32 = 4000;
/// Texture seed used when neither the plan nor the caller sets one.
pub const DEFAULT_SEED: u64 = 0x5EED_BA11;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Pipeline configuration.
///
/// The size bounds cap worst-case memory at `max_width * max_height * 4` bytes per buffer.
pub struct PipelineOpts {
    /// Maximum accepted canvas width.
    pub max_width: u32,
    /// Maximum accepted canvas height.
    pub max_height: u32,
    /// Seed for procedural textures without their own seed.
    pub seed: u64,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl PipelineOpts {
    /// Fail with [`BannerError::InvalidDimensions`] unless both sides are in `1..=max`.
    pub fn check_dimensions(&self, width: u32, height: u32) -> BannerResult<()> {
        self.check_request_dimensions(i64::from(width), i64::from(height)).map(|_| ())
    }

    /// Like [`Self::check_dimensions`] for untrusted request values, which may be zero or
    /// negative. Returns the accepted size.
    pub fn check_request_dimensions(&self, width: i64, height: i64) -> BannerResult<(u32, u32)> {
        let in_range = |v: i64, max: u32| v >= 1 && v <= i64::from(max);
        if !in_range(width, self.max_width) || !in_range(height, self.max_height) {
            return Err(BannerError::InvalidDimensions {
                width,
                height,
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        // Both values are within 1..=u32 bounds here.
        Ok((width as u32, height as u32))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Where a request's plan comes from.
pub enum StyleSource {
    /// A catalog name; unknown names resolve to `modern`.
    Named(String),
    /// An explicit plan.
    Plan(StylePlan),
}

impl Default for StyleSource {
    fn default() -> Self {
        Self::Named("modern".to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One banner request as handed over by the request layer.
///
/// Sizes are signed so that zero or negative values surface as
/// [`BannerError::InvalidDimensions`] rather than as a parse error.
pub struct BannerRequest {
    /// Canvas width in pixels.
    pub width: i64,
    /// Canvas height in pixels.
    pub height: i64,
    /// Style name or explicit plan.
    #[serde(default)]
    pub style: StyleSource,
}

#[derive(Clone, Debug, PartialEq)]
/// A finished banner and the plan that produced it.
pub struct RenderedBanner {
    /// Final pixels (straight RGBA8).
    pub canvas: Canvas,
    /// The resolved plan that was applied.
    pub plan: StylePlan,
}

/// Run one plan over a fresh `width` x `height` canvas.
///
/// Stage order is fixed: gradient, texture, overlay, then the effect chain in declared order.
/// Dimensions and plan parameters are checked before any pixel buffer is allocated.
#[tracing::instrument(skip(plan, opts))]
pub fn run(width: u32, height: u32, plan: &StylePlan, opts: &PipelineOpts) -> BannerResult<Canvas> {
    opts.check_dimensions(width, height)?;
    plan.validate()?;

    let mut canvas = Canvas::new(width, height);
    for layer in plan.layers() {
        apply_layer(&mut canvas, &layer, opts.seed)?;
    }
    apply_effects(&mut canvas, &plan.effects)?;

    tracing::debug!(
        layers = plan.layers().len(),
        effects = plan.effects.len(),
        "banner rendered"
    );
    Ok(canvas)
}

/// Resolve the request's style against `catalog` and run it.
pub fn render_banner(
    request: &BannerRequest,
    catalog: &StylePresetCatalog,
    opts: &PipelineOpts,
) -> BannerResult<RenderedBanner> {
    let plan = match &request.style {
        StyleSource::Named(name) => catalog.resolve(name).clone(),
        StyleSource::Plan(plan) => plan.clone(),
    };
    let (width, height) = opts.check_request_dimensions(request.width, request.height)?;
    let canvas = run(width, height, &plan, opts)?;
    Ok(RenderedBanner { canvas, plan })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
