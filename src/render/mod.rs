/// Plan execution over a fresh canvas.
pub mod pipeline;
