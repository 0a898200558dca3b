/// Convenience result type used across bannerkit.
pub type BannerResult<T> = Result<T, BannerError>;

/// Top-level error taxonomy used by the compositing pipeline.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// A color string was not `#` followed by exactly six hex digits.
    #[error("color format error: {0}")]
    ColorFormat(String),

    /// Requested canvas size is zero or above the configured maximum.
    #[error(
        "invalid dimensions: {width}x{height} (each side must be in 1..={max_width}x1..={max_height})"
    )]
    InvalidDimensions {
        /// Requested width (requests may carry negative values).
        width: i64,
        /// Requested height (requests may carry negative values).
        height: i64,
        /// Configured maximum width.
        max_width: u32,
        /// Configured maximum height.
        max_height: u32,
    },

    /// Two buffers that must share a size do not.
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        expected.0,
        expected.1,
        actual.0,
        actual.1
    )]
    DimensionMismatch {
        /// Size of the destination canvas.
        expected: (u32, u32),
        /// Size of the offending buffer.
        actual: (u32, u32),
    },

    /// Invalid plan or effect parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing plans and catalogs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BannerError {
    /// Build a [`BannerError::ColorFormat`] value.
    pub fn color_format(msg: impl Into<String>) -> Self {
        Self::ColorFormat(msg.into())
    }

    /// Build a [`BannerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BannerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
