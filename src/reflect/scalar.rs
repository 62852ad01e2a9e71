//! Scalar per-pixel reflection math.
//!
//! All angular math happens in *screen space*: coordinates translated to the
//! reflection origin and aspect-corrected so angles are measured in a
//! normalized square space. The parity/sign terms of the reflection formula
//! are pinned down by the mirror-symmetry tests; change them only together.

use crate::foundation::frame::FrameLayout;
use crate::geometry::config::GeometryConfig;
use crate::geometry::segments::SegmentGeometry;
use crate::reflect::{atan2f, cosf, sinf};

/// Pixel-space to screen-space mapping: origin translation plus aspect
/// correction on the y axis.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScreenMap {
    pub origin_x: f32,
    pub origin_y: f32,
    pub aspect: f32,
}

impl ScreenMap {
    pub(crate) fn new(layout: FrameLayout, config: &GeometryConfig) -> Self {
        Self {
            origin_x: config.origin.0 * layout.width as f32,
            origin_y: config.origin.1 * layout.height as f32,
            aspect: layout.aspect(),
        }
    }

    pub(crate) fn to_screen(&self, x: u32, y: u32) -> (f32, f32) {
        (
            x as f32 - self.origin_x,
            (y as f32 - self.origin_y) * self.aspect,
        )
    }

    pub(crate) fn from_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.origin_x, y / self.aspect + self.origin_y)
    }
}

/// Where an output pixel sits relative to the source segment.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReflectInfo {
    pub screen_x: f32,
    pub screen_y: f32,
    /// Angle from the source segment's start boundary.
    pub angle: f32,
    /// `|angle| + segment_width / 2`; the half-width offset centers segment 0
    /// on the source wedge instead of starting it at the wedge's edge.
    pub reference_angle: f32,
    /// Wedge index; 0 is the source segment.
    pub segment: u32,
}

/// Classify one output pixel against the derived geometry.
pub(crate) fn reflect_info(map: &ScreenMap, geom: &SegmentGeometry, x: u32, y: u32) -> ReflectInfo {
    let (screen_x, screen_y) = map.to_screen(x, y);
    let angle = atan2f(screen_y, screen_x) - geom.start_angle;
    let reference_angle = angle.abs() + geom.segment_width / 2.0;

    // atan2 is degenerate at the exact origin; that pixel belongs to the
    // source segment. The max() also guards a NaN reference angle.
    let segment = if screen_x == 0.0 && screen_y == 0.0 {
        0
    } else {
        (reference_angle / geom.segment_width).max(0.0) as u32
    };

    ReflectInfo {
        screen_x,
        screen_y,
        angle,
        reference_angle,
        segment,
    }
}

/// Map a pixel in segment > 0 back into the source segment's coordinate
/// space, returning a pixel-space sample position that may lie outside the
/// frame bounds.
///
/// Odd segments have been mirrored an odd number of times when unfolding
/// outward from the source wedge, hence the parity correction that makes
/// adjacent wedges mirror images rather than pure rotations. The sign
/// alternates with which side of the source wedge the angle falls on.
pub(crate) fn rotate(map: &ScreenMap, geom: &SegmentGeometry, info: &ReflectInfo) -> (f32, f32) {
    debug_assert!(info.segment > 0);

    let base = info.segment as f32 * geom.segment_width;
    let mut reflection_angle = base;
    if info.segment % 2 == 1 {
        reflection_angle -= geom.segment_width - 2.0 * (info.reference_angle - base);
    }
    reflection_angle *= if info.angle < 0.0 { 1.0 } else { -1.0 };

    let cos_a = cosf(reflection_angle);
    let sin_a = sinf(reflection_angle);
    let source_x = info.screen_x * cos_a - info.screen_y * sin_a;
    let source_y = info.screen_y * cos_a + info.screen_x * sin_a;

    map.from_screen(source_x, source_y)
}

#[cfg(test)]
#[path = "../../tests/unit/reflect/scalar.rs"]
mod tests;
