//! Render style configuration: which channels are shown and how.
//!
//! `RenderStyleConfig` never influences histogram or geometry computation.
//! It is read only when assembling the draw list.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::HistogramError;
use crate::scopes::histogram::Channel;

/// Stroke width for outline rendering, in device-independent units.
pub const STROKE_WIDTH: f32 = 2.0;

/// Per-channel visibility plus the fill/stroke toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyleConfig {
    pub show_luma: bool,
    pub show_red: bool,
    pub show_green: bool,
    pub show_blue: bool,
    /// Fill the area under each curve instead of stroking it.
    pub fill: bool,
}

impl Default for RenderStyleConfig {
    fn default() -> Self {
        Self {
            show_luma: true,
            show_red: true,
            show_green: true,
            show_blue: true,
            fill: false,
        }
    }
}

impl RenderStyleConfig {
    /// Parse a JSON style document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, HistogramError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_visible(&self, channel: Channel) -> bool {
        match channel {
            Channel::Luma => self.show_luma,
            Channel::Red => self.show_red,
            Channel::Green => self.show_green,
            Channel::Blue => self.show_blue,
        }
    }

    pub fn with_visibility(mut self, channel: Channel, visible: bool) -> Self {
        let flag = match channel {
            Channel::Luma => &mut self.show_luma,
            Channel::Red => &mut self.show_red,
            Channel::Green => &mut self.show_green,
            Channel::Blue => &mut self.show_blue,
        };
        *flag = visible;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}

impl Channel {
    /// Plot color: gray for luma, the primary for each color channel.
    pub fn color(self) -> Srgb<u8> {
        match self {
            Self::Luma => Srgb::new(0x88, 0x88, 0x88),
            Self::Red => Srgb::new(0xff, 0x00, 0x00),
            Self::Green => Srgb::new(0x00, 0xff, 0x00),
            Self::Blue => Srgb::new(0x00, 0x00, 0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_everything_as_stroke() {
        let style = RenderStyleConfig::default();
        assert!(Channel::ALL.iter().all(|&ch| style.is_visible(ch)));
        assert!(!style.fill);
    }

    #[test]
    fn test_with_visibility_touches_one_channel() {
        let style = RenderStyleConfig::default().with_visibility(Channel::Green, false);
        assert!(!style.is_visible(Channel::Green));
        assert!(style.is_visible(Channel::Luma));
        assert!(style.is_visible(Channel::Red));
        assert!(style.is_visible(Channel::Blue));
    }

    #[test]
    fn test_from_json_partial() {
        let style = RenderStyleConfig::from_json(r#"{ "show_luma": false, "fill": true }"#).unwrap();
        assert_eq!(
            style,
            RenderStyleConfig::default()
                .with_visibility(Channel::Luma, false)
                .with_fill(true)
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = RenderStyleConfig::from_json("{ show_red: ").unwrap_err();
        assert!(matches!(err, HistogramError::Config(_)));
    }

    #[test]
    fn test_channel_colors() {
        assert_eq!(Channel::Red.color(), Srgb::new(255, 0, 0));
        let gray = Channel::Luma.color();
        assert_eq!(gray.red, gray.green);
        assert_eq!(gray.green, gray.blue);
    }
}
