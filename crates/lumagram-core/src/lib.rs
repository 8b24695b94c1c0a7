//! Lumagram Core — luma and RGB histograms as plottable geometry.
//!
//! This crate bins decoded 8-bit pixel buffers into four 256-bucket
//! histograms and scales them into polylines for a viewport. Decoding,
//! windowing and rasterization belong to the caller.

pub mod error;
pub mod image;
pub mod render;
pub mod scopes;
pub mod state;
pub mod style;

// Re-exports for convenience.
pub use error::HistogramError;
pub use self::image::{PixelSample, SourceImage};
pub use render::{DrawCommand, Paint, draw_list};
pub use scopes::geometry::{ChannelPath, ChannelPaths, Viewport, build_paths};
pub use scopes::histogram::{Channel, HistogramSet, collect, compute};
pub use state::HistogramScope;
pub use style::RenderStyleConfig;
