use super::*;

#[test]
fn new_canvas_is_transparent_white() {
    let c = Canvas::new(3, 2);
    assert_eq!(c.size(), (3, 2));
    assert_eq!(c.as_bytes().len(), 3 * 2 * 4);
    assert!(c.as_bytes().chunks_exact(4).all(|p| p == CLEAR_PIXEL));
}

#[test]
fn pixel_access_is_bounds_checked() {
    let mut c = Canvas::new(2, 2);
    c.set_pixel(1, 1, [1, 2, 3, 4]);
    c.set_pixel(5, 5, [9, 9, 9, 9]);
    assert_eq!(c.pixel(1, 1), Some([1, 2, 3, 4]));
    assert_eq!(c.pixel(2, 0), None);
    assert_eq!(c.pixel(0, 2), None);
}

#[test]
fn from_raw_checks_length() {
    assert!(Canvas::from_raw(2, 2, vec![0; 16]).is_ok());
    assert!(Canvas::from_raw(2, 2, vec![0; 15]).is_err());
}

#[test]
fn composite_over_rejects_size_mismatch() {
    let mut base = Canvas::new(4, 3);
    let top = Canvas::new(3, 4);
    let err = base.composite_over(&top).unwrap_err();
    assert!(matches!(
        err,
        BannerError::DimensionMismatch {
            expected: (4, 3),
            actual: (3, 4)
        }
    ));
}

#[test]
fn composite_opaque_top_replaces_base() {
    let mut base = Canvas::filled(4, 4, [10, 20, 30, 255]);
    let top = Canvas::filled(4, 4, [200, 100, 50, 255]);
    base.composite_over(&top).unwrap();
    assert_eq!(base, top);
}

#[test]
fn composite_transparent_top_keeps_opaque_base() {
    let mut base = Canvas::filled(5, 2, [10, 20, 30, 255]);
    let before = base.clone();
    base.composite_over(&Canvas::new(5, 2)).unwrap();
    assert_eq!(base, before);
}
