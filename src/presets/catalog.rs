use std::collections::BTreeMap;

use crate::{
    composition::model::{
        Direction, EffectSpec, GradientSpec, OverlaySpec, StylePlan, TextureKind, TextureSpec,
    },
    foundation::color::Color,
    foundation::error::{BannerError, BannerResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The built-in styles.
pub enum StylePreset {
    /// Blue horizontal gradient with a drop shadow.
    Modern,
    /// Warm overlay on paper texture with a colored border.
    Vintage,
    /// Near-white vertical gradient with a thin dark border.
    Minimalist,
    /// Dark gradient with a glow.
    Bold,
}

impl StylePreset {
    /// Every built-in, in catalog order.
    pub const ALL: [Self; 4] = [Self::Modern, Self::Vintage, Self::Minimalist, Self::Bold];

    /// The preset used for unrecognized names.
    pub const DEFAULT: Self = Self::Modern;

    /// Resolve a preset by name (case-insensitive); anything unrecognized is [`Self::DEFAULT`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "modern" => Self::Modern,
            "vintage" => Self::Vintage,
            "minimalist" => Self::Minimalist,
            "bold" => Self::Bold,
            other => {
                tracing::debug!(style = other, "unknown style, using modern");
                Self::DEFAULT
            }
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Vintage => "vintage",
            Self::Minimalist => "minimalist",
            Self::Bold => "bold",
        }
    }

    /// The declarative plan for this preset.
    pub fn plan(self) -> StylePlan {
        match self {
            Self::Modern => StylePlan {
                gradient: Some(GradientSpec {
                    start: Color::rgb(0x43, 0x61, 0xee),
                    end: Color::rgb(0x3f, 0x37, 0xc9),
                    direction: Direction::Horizontal,
                }),
                texture: None,
                overlay: None,
                effects: vec![
                    EffectSpec::Shadow {
                        offset: (5, 5),
                        color: Color::BLACK,
                        blur_radius: 3,
                    },
                    EffectSpec::Border {
                        width: 0,
                        color: Color::BLACK,
                    },
                ],
            },
            Self::Vintage => StylePlan {
                gradient: None,
                texture: Some(TextureSpec {
                    kind: TextureKind::Paper,
                    opacity: 0.2,
                    seed: None,
                }),
                overlay: Some(OverlaySpec {
                    color: Color::rgb(0xf4, 0xa2, 0x61),
                    opacity: 0.3,
                }),
                effects: vec![EffectSpec::Border {
                    width: 5,
                    color: Color::rgb(0xe7, 0x6f, 0x51),
                }],
            },
            Self::Minimalist => StylePlan {
                gradient: Some(GradientSpec {
                    start: Color::rgb(0xff, 0xff, 0xff),
                    end: Color::rgb(0xf8, 0xf9, 0xfa),
                    direction: Direction::Vertical,
                }),
                texture: None,
                overlay: None,
                effects: vec![EffectSpec::Border {
                    width: 2,
                    color: Color::rgb(0x2b, 0x2d, 0x42),
                }],
            },
            Self::Bold => StylePlan {
                gradient: Some(GradientSpec {
                    start: Color::rgb(0x2b, 0x2d, 0x42),
                    end: Color::rgb(0x8d, 0x99, 0xae),
                    direction: Direction::Horizontal,
                }),
                texture: None,
                overlay: None,
                effects: vec![EffectSpec::Glow {
                    spread: 20,
                    intensity: 0.6,
                }],
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Read-only name → plan table with a modern fallback.
///
/// Built once and then shared; additions go through [`StylePresetCatalog::with_plan`], which
/// consumes the catalog, so a catalog handed to the pipeline never changes underneath it.
pub struct StylePresetCatalog {
    plans: BTreeMap<String, StylePlan>,
    fallback: StylePlan,
}

impl Default for StylePresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StylePresetCatalog {
    /// The four built-in presets.
    pub fn builtin() -> Self {
        let plans = StylePreset::ALL
            .iter()
            .map(|p| (p.name().to_owned(), p.plan()))
            .collect();
        Self {
            plans,
            fallback: StylePreset::DEFAULT.plan(),
        }
    }

    /// Add or replace a named plan. Names are matched case-insensitively.
    pub fn with_plan(mut self, name: &str, plan: StylePlan) -> BannerResult<Self> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(BannerError::validation("style name must be non-empty"));
        }
        plan.validate()
            .map_err(|e| BannerError::validation(format!("style '{key}': {e}")))?;
        if key == StylePreset::DEFAULT.name() {
            self.fallback = plan.clone();
        }
        self.plans.insert(key, plan);
        Ok(self)
    }

    /// Merge a JSON object of `{ "name": plan, ... }` over this catalog.
    pub fn extend_from_json_str(self, s: &str) -> BannerResult<Self> {
        let extra: BTreeMap<String, StylePlan> = serde_json::from_str(s)?;
        extra
            .into_iter()
            .try_fold(self, |cat, (name, plan)| cat.with_plan(&name, plan))
    }

    /// Plan for `name`; unrecognized names resolve to the `modern` plan.
    pub fn resolve(&self, name: &str) -> &StylePlan {
        match self.plans.get(&normalize_name(name)) {
            Some(plan) => plan,
            None => {
                tracing::debug!(style = name, "unknown style, using modern");
                &self.fallback
            }
        }
    }

    /// Whether `name` has its own entry (as opposed to falling back).
    pub fn contains(&self, name: &str) -> bool {
        self.plans.contains_key(&normalize_name(name))
    }

    /// Known style names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plans.keys().map(String::as_str)
    }

    /// Iterate `(name, plan)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StylePlan)> {
        self.plans.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
#[path = "../../tests/unit/presets/catalog.rs"]
mod tests;
