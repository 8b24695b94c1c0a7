//! Error type shared by every fallible entry point of the crate.

/// Caller contract violations reported by the histogram pipeline.
///
/// Degenerate inputs (empty images, zero-area viewports, all-zero
/// histograms) are not errors; they produce defined fallback output.
#[derive(Debug, thiserror::Error)]
pub enum HistogramError {
    #[error("invalid viewport {width}x{height}: dimensions must be finite and non-negative")]
    InvalidViewport { width: f32, height: f32 },
    #[error("pixel buffer holds {actual} samples, expected {expected} for a {width}x{height} image")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("buffer length {len} is not a multiple of the {stride}-byte pixel stride")]
    MisalignedBuffer { len: usize, stride: usize },
    #[error("invalid render style config: {0}")]
    Config(#[from] serde_json::Error),
}
