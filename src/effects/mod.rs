/// Separable Gaussian blur over RGBA8 and gray8 buffers.
pub mod blur;
/// Straight-alpha source-over compositing.
pub mod composite;
/// The effect chain.
pub mod fx;
