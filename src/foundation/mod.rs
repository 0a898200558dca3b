pub mod canvas;
pub mod color;
pub mod error;
pub(crate) mod math;
