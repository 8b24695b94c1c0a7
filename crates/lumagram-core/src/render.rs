//! Draw-list assembly: pairs generated paths with their paint.
//!
//! Renderers paint commands in order. Luma comes first so the color
//! channels sit on top of it.

use glam::Vec2;
use palette::Srgb;

use crate::scopes::geometry::ChannelPaths;
use crate::scopes::histogram::Channel;
use crate::style::{RenderStyleConfig, STROKE_WIDTH};

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Fill the closed area between the curve and the baseline.
    Fill,
    /// Stroke the open polyline.
    Stroke { width: f32 },
}

/// One styled path ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand<'a> {
    pub channel: Channel,
    pub color: Srgb<u8>,
    pub paint: Paint,
    /// Whether the renderer should close the polyline back to its start.
    pub closed: bool,
    pub points: &'a [Vec2],
}

/// Build draw commands for every visible channel that has a path.
pub fn draw_list<'a>(paths: &'a ChannelPaths, style: &RenderStyleConfig) -> Vec<DrawCommand<'a>> {
    let paint = if style.fill {
        Paint::Fill
    } else {
        Paint::Stroke {
            width: STROKE_WIDTH,
        }
    };

    paths
        .iter()
        .filter(|path| style.is_visible(path.channel))
        .map(|path| DrawCommand {
            channel: path.channel,
            color: path.channel.color(),
            paint,
            closed: style.fill,
            points: &path.points,
        })
        .collect()
}
