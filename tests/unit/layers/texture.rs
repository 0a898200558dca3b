use super::*;

fn mean_std(v: &[u8]) -> (f64, f64) {
    let n = v.len() as f64;
    let mean = v.iter().map(|&x| f64::from(x)).sum::<f64>() / n;
    let var = v
        .iter()
        .map(|&x| (f64::from(x) - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}

#[test]
fn noise_covers_full_range_uniformly() {
    let lum = generate_luminance(TextureKind::Noise, 128, 128, 42).unwrap();
    let (mean, std) = mean_std(&lum);
    assert!((mean - 127.5).abs() < 3.0, "mean={mean}");
    // Uniform on [0,255] has sigma ~73.9.
    assert!((std - 73.9).abs() < 4.0, "std={std}");
    assert!(lum.iter().any(|&v| v < 8));
    assert!(lum.iter().any(|&v| v > 247));
}

#[test]
fn grain_matches_normal_shape() {
    let lum = generate_luminance(TextureKind::Grain, 160, 160, 7).unwrap();
    let (mean, std) = mean_std(&lum);
    assert!((mean - f64::from(GRAIN_MEAN)).abs() < 1.5, "mean={mean}");
    assert!((std - f64::from(GRAIN_STDDEV)).abs() < 1.5, "std={std}");
}

#[test]
fn paper_stays_light_and_smooth() {
    let lum = generate_luminance(TextureKind::Paper, 64, 64, 3).unwrap();
    assert!(lum.iter().all(|&v| v >= PAPER_MIN));
    let raw_std = 16.2; // uniform on [200,255]
    let (_, std) = mean_std(&lum);
    assert!(std < raw_std * 0.6, "std={std}");
}

#[test]
fn same_seed_is_bit_identical_and_other_seed_differs() {
    for kind in [TextureKind::Noise, TextureKind::Grain, TextureKind::Paper] {
        let a = generate_luminance(kind, 32, 16, 1).unwrap();
        let b = generate_luminance(kind, 32, 16, 1).unwrap();
        let c = generate_luminance(kind, 32, 16, 2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

#[test]
fn texture_layer_has_uniform_alpha_and_gray_pixels() {
    let spec = TextureSpec {
        kind: TextureKind::Grain,
        opacity: 0.2,
        seed: None,
    };
    let layer = build_texture(10, 4, &spec, 9).unwrap();
    for p in layer.as_bytes().chunks_exact(4) {
        assert_eq!(p[3], 51);
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
    }
}

#[test]
fn spec_seed_overrides_pipeline_seed() {
    let spec = TextureSpec {
        kind: TextureKind::Noise,
        opacity: 1.0,
        seed: Some(99),
    };
    let mut a = Canvas::new(8, 8);
    let mut b = Canvas::new(8, 8);
    apply_texture(&mut a, &spec, 1).unwrap();
    apply_texture(&mut b, &spec, 2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_opacity_texture_leaves_opaque_canvas_unchanged() {
    let spec = TextureSpec {
        kind: TextureKind::Noise,
        opacity: 0.0,
        seed: None,
    };
    let mut c = Canvas::filled(6, 6, [40, 50, 60, 255]);
    let before = c.clone();
    apply_texture(&mut c, &spec, 5).unwrap();
    assert_eq!(c, before);
}
