use crate::{
    foundation::color::Color,
    foundation::error::{BannerError, BannerResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declarative recipe for one banner.
///
/// Layers always run in the fixed order gradient, texture, overlay, whatever order the fields
/// appear in a JSON document. Effects run exactly in the order listed; compositing is not
/// commutative, so reordering them changes the result.
pub struct StylePlan {
    /// Optional full-canvas gradient background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientSpec>,
    /// Optional procedural texture layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<TextureSpec>,
    /// Optional flat-color overlay layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlaySpec>,
    /// Ordered post-effect chain.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

impl StylePlan {
    /// Parse a plan from JSON.
    pub fn from_json_str(s: &str) -> BannerResult<Self> {
        let plan: Self = serde_json::from_str(s)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Present layers in pipeline order.
    pub fn layers(&self) -> Vec<LayerSpec> {
        let mut out = Vec::with_capacity(3);
        if let Some(g) = &self.gradient {
            out.push(LayerSpec::Gradient(g.clone()));
        }
        if let Some(t) = &self.texture {
            out.push(LayerSpec::Texture(t.clone()));
        }
        if let Some(o) = &self.overlay {
            out.push(LayerSpec::Overlay(o.clone()));
        }
        out
    }

    /// Check parameter ranges without touching any pixels.
    pub fn validate(&self) -> BannerResult<()> {
        if let Some(t) = &self.texture {
            validate_unit("texture.opacity", t.opacity)?;
        }
        if let Some(o) = &self.overlay {
            validate_unit("overlay.opacity", o.opacity)?;
        }
        for (i, e) in self.effects.iter().enumerate() {
            e.validate()
                .map_err(|err| BannerError::validation(format!("effects[{i}]: {err}")))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One generated layer, produced at canvas size and composited over the canvas.
pub enum LayerSpec {
    /// Two-color linear gradient.
    Gradient(GradientSpec),
    /// Procedural luminance texture.
    Texture(TextureSpec),
    /// Flat translucent color.
    Overlay(OverlaySpec),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Gradient axis.
pub enum Direction {
    /// Color varies with the column (left to right).
    #[default]
    Horizontal,
    /// Color varies with the row (top to bottom).
    Vertical,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Gradient layer parameters.
pub struct GradientSpec {
    /// Color at the first column/row.
    pub start: Color,
    /// Color at the last column/row.
    pub end: Color,
    /// Interpolation axis.
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Procedural texture generator.
pub enum TextureKind {
    /// Uniform random luminance in `[0, 255]`.
    #[default]
    Noise,
    /// Film grain: approximately normal luminance (mean 127, sigma 20).
    Grain,
    /// Paper: uniform luminance in `[200, 255]` softened by a radius-1 blur.
    Paper,
}

impl TextureKind {
    /// Resolve a generator by name; unknown names fall back to [`TextureKind::Noise`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grain" => Self::Grain,
            "paper" => Self::Paper,
            "noise" => Self::Noise,
            other => {
                tracing::debug!(kind = other, "unknown texture kind, using noise");
                Self::Noise
            }
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::Grain => "grain",
            Self::Paper => "paper",
        }
    }
}

impl serde::Serialize for TextureKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for TextureKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_name(&s))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Texture layer parameters.
pub struct TextureSpec {
    /// Generator; the JSON key is `type`.
    #[serde(default, rename = "type")]
    pub kind: TextureKind,
    /// Uniform layer opacity in `[0, 1]`.
    #[serde(default = "default_texture_opacity")]
    pub opacity: f32,
    /// Noise seed; falls back to the pipeline seed when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_texture_opacity() -> f32 {
    0.2
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Overlay layer parameters.
pub struct OverlaySpec {
    /// Overlay color.
    pub color: Color,
    /// Uniform layer opacity in `[0, 1]`.
    #[serde(default = "default_overlay_opacity")]
    pub opacity: f32,
}

fn default_overlay_opacity() -> f32 {
    0.3
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One post-effect with its parameters. Missing parameters take their documented defaults.
pub enum EffectSpec {
    /// Gaussian blur of the whole canvas.
    Blur {
        /// Standard deviation in pixels; 0 is a no-op.
        #[serde(default = "default_blur_radius")]
        radius: u32,
    },
    /// Drop shadow composited underneath the canvas.
    Shadow {
        /// Shadow displacement `(dx, dy)` in pixels.
        #[serde(default = "default_shadow_offset")]
        offset: (i32, i32),
        /// Shadow color.
        #[serde(default = "default_black", alias = "shadow_color")]
        color: Color,
        /// Blur applied to the shifted alpha mask.
        #[serde(default = "default_shadow_blur")]
        blur_radius: u32,
    },
    /// Opaque rectangular outline flush with the canvas edges.
    Border {
        /// Stroke thickness in pixels; 0 draws nothing.
        #[serde(default = "default_border_width")]
        width: u32,
        /// Stroke color.
        #[serde(default = "default_black")]
        color: Color,
    },
    /// Blurred, brightness-scaled copy of the canvas placed underneath it.
    Glow {
        /// Blur radius of the glow copy.
        #[serde(default = "default_glow_spread")]
        spread: u32,
        /// Brightness multiplier in `[0, 1]`.
        #[serde(default = "default_glow_intensity")]
        intensity: f32,
    },
}

fn default_blur_radius() -> u32 {
    2
}

fn default_shadow_offset() -> (i32, i32) {
    (5, 5)
}

fn default_shadow_blur() -> u32 {
    3
}

fn default_border_width() -> u32 {
    2
}

fn default_glow_spread() -> u32 {
    20
}

fn default_glow_intensity() -> f32 {
    0.5
}

fn default_black() -> Color {
    Color::BLACK
}

impl EffectSpec {
    /// Build an effect from a `(name, parameters)` pair such as
    /// `("shadow", {"offset": [5, 5]})`. `params` may be `null` or an object.
    pub fn from_name_params(name: &str, params: &serde_json::Value) -> BannerResult<Self> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "blur" => "blur",
            "shadow" | "drop_shadow" | "drop-shadow" | "dropshadow" => "shadow",
            "border" => "border",
            "glow" => "glow",
            other => {
                return Err(BannerError::validation(format!(
                    "unknown effect kind '{other}'"
                )));
            }
        };

        let mut obj = match params {
            serde_json::Value::Null => serde_json::Map::new(),
            serde_json::Value::Object(m) => m.clone(),
            _ => {
                return Err(BannerError::validation(format!(
                    "{kind} params must be an object"
                )));
            }
        };
        obj.insert("kind".to_owned(), serde_json::Value::from(kind));

        let effect: Self = serde_json::from_value(serde_json::Value::Object(obj))
            .map_err(|e| BannerError::validation(format!("{kind}: {e}")))?;
        effect.validate()?;
        Ok(effect)
    }

    /// Canonical effect name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blur { .. } => "blur",
            Self::Shadow { .. } => "shadow",
            Self::Border { .. } => "border",
            Self::Glow { .. } => "glow",
        }
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> BannerResult<()> {
        match *self {
            Self::Blur { .. } | Self::Shadow { .. } | Self::Border { .. } => Ok(()),
            Self::Glow { intensity, .. } => validate_unit("glow.intensity", intensity),
        }
    }
}

fn validate_unit(field: &str, v: f32) -> BannerResult<()> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(BannerError::validation(format!(
            "{field} must be finite and within [0, 1], got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
