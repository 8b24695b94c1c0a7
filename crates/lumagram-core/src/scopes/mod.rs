//! Scope computation — channel histograms and their plot geometry.

pub mod geometry;
pub mod histogram;

pub use geometry::{ChannelPath, ChannelPaths, Viewport};
pub use histogram::{Channel, HistogramSet};
