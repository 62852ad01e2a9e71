//! The kaleidoscope engine: one instance per frame layout, reused across
//! frames, with declarative setters and a block-parallel `process`.

use rayon::prelude::*;

use crate::foundation::error::{KaleidoError, KaleidoResult};
use crate::foundation::frame::{FrameLayout, FrameView, split_bands};
use crate::geometry::config::{Corner, Direction, GeometryConfig};
use crate::geometry::segments::SegmentGeometry;
use crate::reflect::scalar::ScreenMap;
use crate::render::block::{RenderContext, process_band};
use crate::render::sampler::EdgePolicy;
use crate::render::visualise::paint_segments;

/// A kaleidoscope reflection engine bound to one frame layout.
///
/// Construct one instance per distinct `(width, height, pixel layout)`
/// combination and reuse it across frames; configuration may change between
/// frames, each change triggering a lazy geometry recompute on the next
/// [`process`](Self::process).
///
/// The engine has two states: *uninitialized* (derived geometry stale) and
/// *ready*. Every geometry setter moves it back to uninitialized;
/// `process`/`visualise` derive the geometry on demand and then execute.
pub struct Kaleidoscope {
    layout: FrameLayout,
    config: GeometryConfig,
    geometry: Option<SegmentGeometry>,
    pool: Option<rayon::ThreadPool>,
}

impl Kaleidoscope {
    /// Create an engine for frames of the given shape. `stride == 0` means
    /// tightly packed rows.
    pub fn new(
        width: u32,
        height: u32,
        component_size: u32,
        num_components: u32,
        stride: u32,
    ) -> KaleidoResult<Self> {
        let layout = FrameLayout::new(width, height, component_size, num_components, stride)?;
        Ok(Self {
            layout,
            config: GeometryConfig::default(),
            geometry: None,
            pool: None,
        })
    }

    /// The frame layout this engine was constructed for.
    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// The current declarative configuration.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Set the normalized center of the reflection; both coordinates must be
    /// in `[0, 1]`.
    pub fn set_origin(&mut self, x: f32, y: f32) -> KaleidoResult<()> {
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Err(KaleidoError::invalid_parameter(
                "origin must be within [0,1]x[0,1]",
            ));
        }
        self.config.origin = (x, y);
        self.invalidate();
        Ok(())
    }

    /// Normalized reflection origin.
    pub fn origin(&self) -> (f32, f32) {
        self.config.origin
    }

    /// Set half the number of wedges; must be at least 1.
    pub fn set_segmentation(&mut self, segmentation: u32) -> KaleidoResult<()> {
        if segmentation == 0 {
            return Err(KaleidoError::invalid_parameter(
                "segmentation must be >= 1",
            ));
        }
        self.config.segmentation = segmentation;
        self.invalidate();
        Ok(())
    }

    /// Half the number of wedges.
    pub fn segmentation(&self) -> u32 {
        self.config.segmentation
    }

    /// Set whether the source wedge is corner-centered (`None`) or extends
    /// from the corner in a rotational direction.
    pub fn set_segment_direction(&mut self, direction: Direction) -> KaleidoResult<()> {
        self.config.segment_direction = direction;
        self.invalidate();
        Ok(())
    }

    /// Source-wedge direction.
    pub fn segment_direction(&self) -> Direction {
        self.config.segment_direction
    }

    /// Set the corner that anchors the source wedge when no explicit source
    /// angle is configured.
    pub fn set_preferred_corner(&mut self, corner: Corner) -> KaleidoResult<()> {
        self.config.preferred_corner = corner;
        self.invalidate();
        Ok(())
    }

    /// Preferred anchor corner.
    pub fn preferred_corner(&self) -> Corner {
        self.config.preferred_corner
    }

    /// Set the direction in which corners are walked when breaking distance
    /// ties; must be directional.
    pub fn set_corner_search_direction(&mut self, direction: Direction) -> KaleidoResult<()> {
        if direction == Direction::None {
            return Err(KaleidoError::invalid_parameter(
                "corner search direction must be clockwise or anticlockwise",
            ));
        }
        self.config.corner_search_direction = direction;
        self.invalidate();
        Ok(())
    }

    /// Corner search direction.
    pub fn corner_search_direction(&self) -> Direction {
        self.config.corner_search_direction
    }

    /// Set an explicit source-segment angle (radians from the positive x
    /// axis, anticlockwise), or `None` to restore corner-based placement.
    pub fn set_source_segment(&mut self, angle: Option<f32>) -> KaleidoResult<()> {
        if let Some(a) = angle
            && !a.is_finite()
        {
            return Err(KaleidoError::invalid_parameter(
                "source segment angle must be finite",
            ));
        }
        self.config.source_segment_angle = angle;
        self.invalidate();
        Ok(())
    }

    /// Explicit source-segment angle, if set.
    pub fn source_segment(&self) -> Option<f32> {
        self.config.source_segment_angle
    }

    /// Choose the edge policy: tessellated reflection (`true`) or background
    /// fill.
    pub fn set_reflect_edges(&mut self, reflect: bool) -> KaleidoResult<()> {
        self.config.edge_reflect = reflect;
        Ok(())
    }

    /// Current edge policy selector.
    pub fn reflect_edges(&self) -> bool {
        self.config.edge_reflect
    }

    /// Set the background pixel written when a background-mode sample falls
    /// outside the frame; its length must equal the pixel size. `None` means
    /// "leave the destination pixel untouched".
    pub fn set_background_color(&mut self, color: Option<Vec<u8>>) -> KaleidoResult<()> {
        if let Some(ref c) = color
            && c.len() != self.layout.pixel_size()
        {
            return Err(KaleidoError::invalid_parameter(format!(
                "background color is {} bytes, pixel size is {}",
                c.len(),
                self.layout.pixel_size()
            )));
        }
        self.config.background_color = color;
        Ok(())
    }

    /// Configured background pixel, if any.
    pub fn background_color(&self) -> Option<&[u8]> {
        self.config.background_color.as_deref()
    }

    /// Set how far outside the frame a sample may land and still be clamped
    /// to the nearest edge pixel.
    pub fn set_edge_threshold(&mut self, threshold: u32) -> KaleidoResult<()> {
        self.config.edge_threshold = threshold;
        Ok(())
    }

    /// Edge clamp threshold in pixels.
    pub fn edge_threshold(&self) -> u32 {
        self.config.edge_threshold
    }

    /// Set the worker count for `process`: 0 auto-detects hardware
    /// concurrency, 1 forces single-threaded execution.
    pub fn set_threading(&mut self, threads: u32) -> KaleidoResult<()> {
        self.config.threads = threads;
        self.pool = None;
        Ok(())
    }

    /// Configured worker count.
    pub fn threading(&self) -> u32 {
        self.config.threads
    }

    /// Apply the kaleidoscope to one frame.
    ///
    /// Reads `input`, writes every pixel of `output` (except background-mode
    /// holes with no background color configured). Both buffers must cover
    /// the constructed layout. On error the contents of `output` are
    /// unspecified.
    #[tracing::instrument(skip_all, fields(width = self.layout.width, height = self.layout.height))]
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> KaleidoResult<()> {
        if output.len() < self.layout.required_len() {
            return Err(KaleidoError::invalid_parameter(format!(
                "output frame is {} bytes, layout requires {}",
                output.len(),
                self.layout.required_len()
            )));
        }
        let input = FrameView::new(self.layout, input)?;
        let geom = self.ensure_geometry();
        let threads = self.config.threads;
        if threads != 1 {
            self.ensure_pool()?;
        }

        let ctx = RenderContext {
            layout: self.layout,
            geom,
            map: ScreenMap::new(self.layout, &self.config),
            policy: self.edge_policy(),
            input,
        };

        if threads == 1 {
            for band in &mut split_bands(self.layout, output, 1) {
                process_band(&ctx, band);
            }
            return Ok(());
        }

        let pool = self
            .pool
            .as_ref()
            .ok_or_else(|| KaleidoError::unsupported("worker pool unavailable"))?;
        let n = pool.current_num_threads().max(1) as u32;
        let bands = split_bands(self.layout, output, n);
        pool.install(|| {
            bands
                .into_par_iter()
                .for_each(|mut band| process_band(&ctx, &mut band));
        });
        Ok(())
    }

    /// Paint each pixel with a flat palette color per segment index instead
    /// of sampling. Debug aid for validating geometry; requires an 8-bit
    /// frame with at least three components. Always single-pass.
    #[tracing::instrument(skip_all)]
    pub fn visualise(&mut self, output: &mut [u8]) -> KaleidoResult<()> {
        if self.layout.component_size != 1 || self.layout.num_components < 3 {
            return Err(KaleidoError::unsupported(
                "visualisation requires an 8-bit frame with at least 3 components",
            ));
        }
        if output.len() < self.layout.required_len() {
            return Err(KaleidoError::invalid_parameter(format!(
                "output frame is {} bytes, layout requires {}",
                output.len(),
                self.layout.required_len()
            )));
        }
        let geom = self.ensure_geometry();
        let map = ScreenMap::new(self.layout, &self.config);
        paint_segments(self.layout, &map, &geom, output);
        Ok(())
    }

    fn edge_policy(&self) -> EdgePolicy<'_> {
        if self.config.edge_reflect {
            EdgePolicy::Reflect
        } else {
            EdgePolicy::Background {
                color: self.config.background_color.as_deref(),
                threshold: self.config.edge_threshold as f32,
            }
        }
    }

    fn invalidate(&mut self) {
        self.geometry = None;
    }

    /// Derive the segment geometry if any setter invalidated it. Runs once,
    /// before any band is dispatched, so no partial recompute is ever
    /// visible to a worker.
    fn ensure_geometry(&mut self) -> SegmentGeometry {
        if let Some(geom) = self.geometry {
            return geom;
        }
        let geom = SegmentGeometry::derive(&self.config);
        tracing::debug!(
            n_segments = geom.n_segments,
            segment_width = geom.segment_width,
            start_angle = geom.start_angle,
            "derived segment geometry"
        );
        self.geometry = Some(geom);
        geom
    }

    /// Build the worker pool on first use, or after `set_threading` changed
    /// the count. Pool construction is amortized across frames.
    fn ensure_pool(&mut self) -> KaleidoResult<()> {
        if self.pool.is_some() {
            return Ok(());
        }
        let mut builder = rayon::ThreadPoolBuilder::new();
        if self.config.threads > 1 {
            builder = builder.num_threads(self.config.threads as usize);
        }
        let pool = builder.build().map_err(|e| {
            KaleidoError::Other(anyhow::anyhow!("failed to build worker pool: {e}"))
        })?;
        self.pool = Some(pool);
        Ok(())
    }
}

impl std::fmt::Debug for Kaleidoscope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kaleidoscope")
            .field("layout", &self.layout)
            .field("config", &self.config)
            .field("ready", &self.geometry.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/kaleidoscope.rs"]
mod tests;
