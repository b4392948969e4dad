use thiserror::Error;

/// Errors raised by raster surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The requested surface dimensions are unusable.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding the surface for export failed.
    #[error("failed to encode surface: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors raised while decoding an imported image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream is not a readable image.
    #[error("failed to decode image: {0}")]
    Malformed(#[from] image::ImageError),

    /// The background decode worker went away without producing a result.
    #[error("image decode worker terminated unexpectedly")]
    WorkerGone,
}
