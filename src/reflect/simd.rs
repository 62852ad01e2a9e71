//! 4-wide reflection math over portable `wide` vectors.
//!
//! Same formulas as [`crate::reflect::scalar`], four adjacent output pixels
//! per call. Comparison/blend replaces the scalar branches for the parity,
//! sign, origin, and source-segment cases.

use wide::{CmpEq, CmpGe, CmpLt, f32x4, i32x4};

use crate::foundation::frame::FrameLayout;
use crate::geometry::segments::SegmentGeometry;
use crate::reflect::scalar::ScreenMap;

/// Per-lane constants splatted once per frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LaneConstants {
    pub width: f32x4,
    pub height: f32x4,
    origin_x: f32x4,
    origin_y: f32x4,
    aspect: f32x4,
    start_angle: f32x4,
    segment_width: f32x4,
    half_segment_width: f32x4,
}

impl LaneConstants {
    pub(crate) fn new(layout: FrameLayout, map: &ScreenMap, geom: &SegmentGeometry) -> Self {
        Self {
            width: f32x4::splat(layout.width as f32),
            height: f32x4::splat(layout.height as f32),
            origin_x: f32x4::splat(map.origin_x),
            origin_y: f32x4::splat(map.origin_y),
            aspect: f32x4::splat(map.aspect),
            start_angle: f32x4::splat(geom.start_angle),
            segment_width: f32x4::splat(geom.segment_width),
            half_segment_width: f32x4::splat(geom.segment_width / 2.0),
        }
    }
}

/// Reflect info for the four pixels `(x..x+4, y)`.
pub(crate) struct ReflectInfo4 {
    pub screen_x: f32x4,
    pub screen_y: f32x4,
    pub angle: f32x4,
    pub reference_angle: f32x4,
    pub segment_i: i32x4,
    pub segment_f: f32x4,
}

pub(crate) fn reflect_info4(c: &LaneConstants, x: u32, y: u32) -> ReflectInfo4 {
    let xs = f32x4::from([
        x as f32,
        (x + 1) as f32,
        (x + 2) as f32,
        (x + 3) as f32,
    ]);
    let ys = f32x4::splat(y as f32);

    let screen_x = xs - c.origin_x;
    let screen_y = (ys - c.origin_y) * c.aspect;
    let angle = screen_y.atan2(screen_x) - c.start_angle;

    // Lanes at the exact origin belong to the source segment; forcing the
    // reference angle to zero there also neutralizes a NaN from atan2(0, 0).
    let at_origin = screen_x.cmp_eq(f32x4::ZERO) & screen_y.cmp_eq(f32x4::ZERO);
    let reference_angle = at_origin.blend(f32x4::ZERO, angle.abs() + c.half_segment_width);

    let segment_i = (reference_angle / c.segment_width)
        .max(f32x4::ZERO)
        .trunc_int();
    let segment_f = segment_i.round_float();

    ReflectInfo4 {
        screen_x,
        screen_y,
        angle,
        reference_angle,
        segment_i,
        segment_f,
    }
}

/// Rotate/reflect the four pixels `(x..x+4, y)` back into the source
/// segment's coordinate space, returning pixel-space sample positions.
///
/// Source-segment lanes rotate by a masked-to-zero angle, which is the
/// identity up to the screen-space round trip.
pub(crate) fn rotate4(c: &LaneConstants, x: u32, y: u32) -> (f32x4, f32x4) {
    let info = reflect_info4(c, x, y);

    let base = info.segment_f * c.segment_width;
    let parity = (info.segment_i & i32x4::splat(1)).round_float();
    let mut reflection_angle =
        base - parity * (c.segment_width - f32x4::splat(2.0) * (info.reference_angle - base));

    let sign = info.angle.cmp_lt(f32x4::ZERO).blend(f32x4::ONE, -f32x4::ONE);
    reflection_angle *= sign;
    reflection_angle = info
        .segment_f
        .cmp_ge(f32x4::ONE)
        .blend(reflection_angle, f32x4::ZERO);

    let cos_a = reflection_angle.cos();
    let sin_a = reflection_angle.sin();
    let source_x = info.screen_x * cos_a - info.screen_y * sin_a;
    let source_y = info.screen_y * cos_a + info.screen_x * sin_a;

    (
        source_x + c.origin_x,
        source_y / c.aspect + c.origin_y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/reflect/simd.rs"]
mod tests;
