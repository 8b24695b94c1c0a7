//! Luma + RGB histogram computation.

use serde::{Deserialize, Serialize};

use crate::image::{PixelSample, SourceImage};

/// Number of buckets per channel, one per 8-bit value.
pub const BUCKETS: usize = 256;

/// BT.601 luma weights applied to 8-bit R, G, B.
const LUMA_BT601: [f64; 3] = [0.299, 0.587, 0.114];

/// One of the four plotted distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Luma,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in draw order.
    pub const ALL: [Channel; 4] = [Self::Luma, Self::Red, Self::Green, Self::Blue];

    /// Position of this channel in [`Channel::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Luma => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Blue => 3,
        }
    }
}

/// Bucket counts for luma, red, green and blue (256 buckets each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramSet {
    /// Bucket counts indexed by [`Channel::index`]. Each `Vec` has 256 entries.
    bins: [Vec<u64>; 4],
    /// Number of pixels that were binned.
    pixel_count: u64,
    /// Peak bucket value across all channels.
    peak: u64,
}

impl HistogramSet {
    /// Four all-zero tables, as produced for an empty image.
    pub fn empty() -> Self {
        Self {
            bins: std::array::from_fn(|_| vec![0; BUCKETS]),
            pixel_count: 0,
            peak: 0,
        }
    }

    /// Bucket counts for one channel; always 256 entries.
    pub fn channel(&self, channel: Channel) -> &[u64] {
        &self.bins[channel.index()]
    }

    pub fn luma(&self) -> &[u64] {
        self.channel(Channel::Luma)
    }

    pub fn red(&self) -> &[u64] {
        self.channel(Channel::Red)
    }

    pub fn green(&self) -> &[u64] {
        self.channel(Channel::Green)
    }

    pub fn blue(&self) -> &[u64] {
        self.channel(Channel::Blue)
    }

    /// Number of pixels binned; every channel sums to this.
    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }

    /// Largest bucket count over all four channels, used as the shared
    /// vertical scale.
    pub fn peak(&self) -> u64 {
        self.peak
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    /// Add `weight` occurrences of `px` to every channel.
    pub(crate) fn record(&mut self, px: PixelSample, weight: u64) {
        let [luma_bins, red, green, blue] = &mut self.bins;
        luma_bins[luma(px) as usize] += weight;
        red[px.r as usize] += weight;
        green[px.g as usize] += weight;
        blue[px.b as usize] += weight;
        self.pixel_count += weight;
    }

    pub(crate) fn refresh_peak(&mut self) {
        self.peak = self
            .bins
            .iter()
            .flat_map(|bins| bins.iter().copied())
            .max()
            .unwrap_or(0);
    }
}

impl Default for HistogramSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Luma of an 8-bit sample: `round(0.299 R + 0.587 G + 0.114 B)`,
/// rounded half-up and clamped to `[0, 255]`.
pub fn luma(px: PixelSample) -> u8 {
    let y = LUMA_BT601[0] * f64::from(px.r)
        + LUMA_BT601[1] * f64::from(px.g)
        + LUMA_BT601[2] * f64::from(px.b);
    y.round().clamp(0.0, 255.0) as u8
}

/// Bin a sequence of pixels into a fresh [`HistogramSet`].
pub fn collect<I>(pixels: I) -> HistogramSet
where
    I: IntoIterator<Item = PixelSample>,
{
    let mut set = HistogramSet::empty();
    for px in pixels {
        set.record(px, 1);
    }
    set.refresh_peak();
    set
}

/// Compute histograms for a decoded image.
pub fn compute(image: &SourceImage) -> HistogramSet {
    collect(image.pixels().iter().copied())
}
