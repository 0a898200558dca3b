use super::*;

#[test]
fn over_src_alpha_0_keeps_visible_dst() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [255, 255, 255, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_transparent_src_keeps_transparent_dst_color() {
    assert_eq!(over([255, 255, 255, 0], [9, 9, 9, 0]), [255, 255, 255, 0]);
    assert_eq!(over([0, 0, 0, 0], [9, 9, 9, 0]), [0, 0, 0, 0]);
}

#[test]
fn over_half_alpha_on_opaque_mixes_evenly() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
}

#[test]
fn over_partial_on_partial_accumulates_alpha() {
    // 0.5 over 0.5 -> 0.75 coverage.
    let out = over([0, 0, 255, 128], [255, 0, 0, 128]);
    assert!((191..=192).contains(&out[3]), "{out:?}");
    // Top contributes twice the weight of the partially hidden base.
    assert!(out[0] > out[2]);
}

#[test]
fn over_in_place_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 4];
    assert!(over_in_place(&mut dst, &src, 2).is_err());
}

#[test]
fn over_in_place_blends_every_pixel() {
    let mut dst = [0u8, 0, 0, 255].repeat(6);
    let src = [255u8, 255, 255, 255].repeat(6);
    over_in_place(&mut dst, &src, 3).unwrap();
    assert_eq!(dst, src);
}
