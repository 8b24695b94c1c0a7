//! Histogram scope state and recompute policy.
//!
//! A new image re-runs collection and geometry; a resize only rebuilds
//! geometry from the histograms already published; a style change
//! recomputes nothing.

use crate::image::SourceImage;
use crate::render::{DrawCommand, draw_list};
use crate::scopes::geometry::{ChannelPaths, Viewport, build_paths};
use crate::scopes::histogram::{self, HistogramSet};
use crate::style::RenderStyleConfig;

/// Last published histograms and geometry for one plot surface.
#[derive(Debug, Clone, Default)]
pub struct HistogramScope {
    histograms: Option<HistogramSet>,
    viewport: Viewport,
    paths: ChannelPaths,
    style: RenderStyleConfig,
}

impl HistogramScope {
    pub fn new(viewport: Viewport, style: RenderStyleConfig) -> Self {
        Self {
            viewport,
            style,
            ..Self::default()
        }
    }

    /// Bin a new image and rebuild geometry for the current viewport.
    pub fn set_image(&mut self, image: &SourceImage) {
        let set = histogram::compute(image);
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            pixels = set.pixel_count(),
            peak = set.peak(),
            "collected histograms"
        );
        self.histograms = Some(set);
        self.rebuild_paths();
    }

    /// Rebuild geometry for a new viewport, reusing the last histograms.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.rebuild_paths();
    }

    /// Replace the render style. Geometry is left untouched.
    pub fn set_style(&mut self, style: RenderStyleConfig) {
        self.style = style;
    }

    /// Drop the current image and its geometry.
    pub fn clear(&mut self) {
        self.histograms = None;
        self.paths = ChannelPaths::default();
    }

    fn rebuild_paths(&mut self) {
        let Some(set) = &self.histograms else {
            tracing::debug!("no image yet, skipping path rebuild");
            return;
        };
        if self.viewport.is_empty() {
            tracing::debug!(
                width = self.viewport.width(),
                height = self.viewport.height(),
                "zero-area viewport, skipping histogram geometry"
            );
            self.paths = ChannelPaths::default();
            return;
        }
        self.paths = build_paths(set, self.viewport);
        tracing::debug!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            paths = self.paths.len(),
            "rebuilt histogram paths"
        );
    }

    pub fn histograms(&self) -> Option<&HistogramSet> {
        self.histograms.as_ref()
    }

    pub fn paths(&self) -> &ChannelPaths {
        &self.paths
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn style(&self) -> &RenderStyleConfig {
        &self.style
    }

    /// Draw commands for the current paths under the current style.
    pub fn draw_list(&self) -> Vec<DrawCommand<'_>> {
        draw_list(&self.paths, &self.style)
    }
}
