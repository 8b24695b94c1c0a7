//! Polyline geometry for plotting histograms inside a viewport.
//!
//! Each channel becomes a 258-point path: a left baseline anchor, one
//! sample per bucket, and a right baseline anchor. Closing the path against
//! the baseline lets a renderer fill the area under the curve.
//!
//! All four curves share one vertical scale taken from the global peak
//! bucket so their amplitudes stay comparable.
//!
//! ```text
//! x_i = (i + 0.5) × width / 256
//! y_i = height − count_i × height / peak
//! ```

use std::collections::BTreeMap;

use glam::Vec2;
use serde::Serialize;

use crate::error::HistogramError;
use crate::scopes::histogram::{BUCKETS, Channel, HistogramSet};

/// Points per channel path: two baseline anchors plus one per bucket.
pub const PATH_POINTS: usize = BUCKETS + 2;

/// Drawing area size in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Zero-area viewport; nothing is drawn until a real size arrives.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a viewport. Negative or non-finite sizes are rejected.
    pub fn new(width: f32, height: f32) -> Result<Self, HistogramError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(HistogramError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// One channel's histogram curve scaled into a viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelPath {
    pub channel: Channel,
    /// Exactly [`PATH_POINTS`] points with non-decreasing x.
    pub points: Vec<Vec2>,
}

/// Generated paths keyed by channel. Empty when nothing can be drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChannelPaths {
    paths: BTreeMap<Channel, ChannelPath>,
}

impl ChannelPaths {
    pub fn get(&self, channel: Channel) -> Option<&ChannelPath> {
        self.paths.get(&channel)
    }

    /// Paths in [`Channel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &ChannelPath> {
        self.paths.values()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Build one path per channel for the given viewport.
///
/// Returns no paths for a zero-area viewport. An all-zero histogram set
/// yields flat paths along the baseline.
pub fn build_paths(histograms: &HistogramSet, viewport: Viewport) -> ChannelPaths {
    if viewport.is_empty() {
        tracing::trace!("skipping histogram geometry for empty viewport");
        return ChannelPaths::default();
    }

    let peak = histograms.peak();
    let paths = Channel::ALL
        .into_iter()
        .map(|channel| {
            let points = channel_points(histograms.channel(channel), peak, viewport);
            (channel, ChannelPath { channel, points })
        })
        .collect();

    tracing::trace!(
        peak,
        width = viewport.width,
        height = viewport.height,
        "built histogram paths"
    );
    ChannelPaths { paths }
}

fn channel_points(bins: &[u64], peak: u64, viewport: Viewport) -> Vec<Vec2> {
    let Viewport { width, height } = viewport;
    let step = width / BUCKETS as f32;

    let mut points = Vec::with_capacity(PATH_POINTS);
    points.push(Vec2::new(0.0, height));
    points.extend(bins.iter().enumerate().map(|(i, &count)| {
        let x = (i as f32 + 0.5) * step;
        let y = if peak == 0 {
            height
        } else {
            (height - count as f32 / peak as f32 * height).clamp(0.0, height)
        };
        Vec2::new(x, y)
    }));
    points.push(Vec2::new(width, height));
    points
}
