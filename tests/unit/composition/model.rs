use super::*;
use serde_json::json;

#[test]
fn effect_defaults_fill_missing_params() {
    assert_eq!(
        EffectSpec::from_name_params("blur", &json!({})).unwrap(),
        EffectSpec::Blur { radius: 2 }
    );
    assert_eq!(
        EffectSpec::from_name_params("shadow", &serde_json::Value::Null).unwrap(),
        EffectSpec::Shadow {
            offset: (5, 5),
            color: Color::BLACK,
            blur_radius: 3
        }
    );
    assert_eq!(
        EffectSpec::from_name_params("border", &json!({})).unwrap(),
        EffectSpec::Border {
            width: 2,
            color: Color::BLACK
        }
    );
    assert_eq!(
        EffectSpec::from_name_params("glow", &json!({})).unwrap(),
        EffectSpec::Glow {
            spread: 20,
            intensity: 0.5
        }
    );
}

#[test]
fn effect_params_override_defaults() {
    let e = EffectSpec::from_name_params(
        "Drop-Shadow",
        &json!({"offset": [-2, 7], "color": "#112233", "blur_radius": 0}),
    )
    .unwrap();
    assert_eq!(
        e,
        EffectSpec::Shadow {
            offset: (-2, 7),
            color: Color::rgb(0x11, 0x22, 0x33),
            blur_radius: 0
        }
    );
    assert_eq!(e.name(), "shadow");
}

#[test]
fn unknown_effect_kind_is_rejected() {
    let err = EffectSpec::from_name_params("sparkle", &json!({})).unwrap_err();
    assert!(err.to_string().contains("unknown effect kind 'sparkle'"));
}

#[test]
fn effect_param_errors_are_validation_errors() {
    let err = EffectSpec::from_name_params("border", &json!({"color": "#zzzzzz"})).unwrap_err();
    assert!(matches!(err, BannerError::Validation(_)));
    let err = EffectSpec::from_name_params("glow", &json!({"intensity": 1.5})).unwrap_err();
    assert!(matches!(err, BannerError::Validation(_)));
    let err = EffectSpec::from_name_params("blur", &json!([1, 2])).unwrap_err();
    assert!(matches!(err, BannerError::Validation(_)));
}

#[test]
fn effects_keep_declared_order_through_json() {
    let plan = StylePlan::from_json_str(
        r##"{
            "effects": [
                {"kind": "border", "width": 4, "color": "#ff0000"},
                {"kind": "blur"},
                {"kind": "glow", "spread": 3}
            ]
        }"##,
    )
    .unwrap();
    let names: Vec<_> = plan.effects.iter().map(EffectSpec::name).collect();
    assert_eq!(names, ["border", "blur", "glow"]);
}

#[test]
fn layers_follow_fixed_stage_order() {
    let plan: StylePlan = serde_json::from_value(json!({
        "overlay": {"color": "#f4a261"},
        "texture": {"type": "paper"},
        "gradient": {"start": "#000000", "end": "#ffffff"}
    }))
    .unwrap();
    let layers = plan.layers();
    assert!(matches!(layers[0], LayerSpec::Gradient(_)));
    assert!(matches!(layers[1], LayerSpec::Texture(_)));
    assert!(matches!(layers[2], LayerSpec::Overlay(_)));
}

#[test]
fn layer_defaults_apply() {
    let plan: StylePlan = serde_json::from_value(json!({
        "gradient": {"start": "#000000", "end": "#ffffff"},
        "texture": {},
        "overlay": {"color": "#f4a261"}
    }))
    .unwrap();
    assert_eq!(plan.gradient.unwrap().direction, Direction::Horizontal);
    let texture = plan.texture.unwrap();
    assert_eq!(texture.kind, TextureKind::Noise);
    assert_eq!(texture.opacity, 0.2);
    assert_eq!(texture.seed, None);
    assert_eq!(plan.overlay.unwrap().opacity, 0.3);
}

#[test]
fn unknown_texture_kind_falls_back_to_noise() {
    assert_eq!(TextureKind::from_name("marble"), TextureKind::Noise);
    assert_eq!(TextureKind::from_name(" Grain "), TextureKind::Grain);
    let t: TextureSpec = serde_json::from_value(json!({"type": "marble"})).unwrap();
    assert_eq!(t.kind, TextureKind::Noise);
}

#[test]
fn validate_rejects_out_of_range_opacity_and_intensity() {
    let plan = StylePlan {
        overlay: Some(OverlaySpec {
            color: Color::WHITE,
            opacity: 1.2,
        }),
        ..StylePlan::default()
    };
    assert!(plan.validate().is_err());

    let plan = StylePlan {
        effects: vec![
            EffectSpec::Blur { radius: 1 },
            EffectSpec::Glow {
                spread: 4,
                intensity: 1.5,
            },
        ],
        ..StylePlan::default()
    };
    let err = plan.validate().unwrap_err();
    assert!(err.to_string().contains("effects[1]"));
}

#[test]
fn large_radii_pass_validation() {
    let plan = StylePlan {
        effects: vec![
            EffectSpec::Blur { radius: 10_000 },
            EffectSpec::Shadow {
                offset: (0, 0),
                color: Color::BLACK,
                blur_radius: 300,
            },
            EffectSpec::Glow {
                spread: 300,
                intensity: 0.5,
            },
        ],
        ..StylePlan::default()
    };
    assert!(plan.validate().is_ok());
}

#[test]
fn shadow_color_key_is_accepted() {
    let e = EffectSpec::from_name_params("shadow", &json!({"shadow_color": "#ff0000"})).unwrap();
    assert_eq!(
        e,
        EffectSpec::Shadow {
            offset: (5, 5),
            color: Color::rgb(255, 0, 0),
            blur_radius: 3,
        }
    );
}

#[test]
fn bad_color_in_plan_is_a_serde_error() {
    let err = StylePlan::from_json_str(r##"{"overlay": {"color": "#abc"}}"##).unwrap_err();
    assert!(matches!(err, BannerError::Serde(_)));
}

#[test]
fn plan_serializes_effects_with_kind_tags() {
    let plan = StylePlan {
        effects: vec![EffectSpec::Border {
            width: 5,
            color: Color::rgb(0xe7, 0x6f, 0x51),
        }],
        ..StylePlan::default()
    };
    assert_eq!(
        serde_json::to_value(&plan).unwrap(),
        json!({"effects": [{"kind": "border", "width": 5, "color": "#e76f51"}]})
    );
}
