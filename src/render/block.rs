//! Block processors: apply the reflection transform to a band of output
//! rows, in scalar or 4-wide SIMD form.
//!
//! Each output pixel depends only on input pixels, never on other output
//! pixels, so bands can be processed in any order and in parallel.

use wide::{CmpGe, f32x4, i32x4};

use crate::foundation::frame::{BandMut, FrameLayout, FrameView};
use crate::geometry::segments::SegmentGeometry;
use crate::reflect::scalar::{ScreenMap, reflect_info, rotate};
use crate::reflect::simd::{LaneConstants, rotate4};
use crate::render::sampler::{EdgePolicy, fold_reflect, resolve_clamped};

/// Everything a band worker needs, shared read-only across bands.
pub(crate) struct RenderContext<'a> {
    pub layout: FrameLayout,
    pub geom: SegmentGeometry,
    pub map: ScreenMap,
    pub policy: EdgePolicy<'a>,
    pub input: FrameView<'a>,
}

impl RenderContext<'_> {
    /// The 4-wide path needs whole vectors per row.
    pub(crate) fn use_simd(&self) -> bool {
        self.layout.width % 4 == 0
    }
}

/// Process one band, picking the SIMD path when the width allows it.
pub(crate) fn process_band(ctx: &RenderContext<'_>, band: &mut BandMut<'_>) {
    if ctx.use_simd() {
        process_band_simd(ctx, band);
    } else {
        process_band_scalar(ctx, band);
    }
}

pub(crate) fn process_band_scalar(ctx: &RenderContext<'_>, band: &mut BandMut<'_>) {
    for y in band.rows() {
        for x in 0..ctx.layout.width {
            let info = reflect_info(&ctx.map, &ctx.geom, x, y);
            if info.segment == 0 {
                // Already inside the source wedge.
                let src = ctx.input.pixel(x, y);
                band.pixel_mut(x, y).copy_from_slice(src);
                continue;
            }
            let (sx, sy) = rotate(&ctx.map, &ctx.geom, &info);
            write_sample(ctx, band, x, y, sx, sy);
        }
    }
}

pub(crate) fn process_band_simd(ctx: &RenderContext<'_>, band: &mut BandMut<'_>) {
    debug_assert!(ctx.layout.width % 4 == 0);
    let lanes = LaneConstants::new(ctx.layout, &ctx.map, &ctx.geom);

    for y in band.rows() {
        for x in (0..ctx.layout.width).step_by(4) {
            let (sx, sy) = rotate4(&lanes, x, y);
            match ctx.policy {
                EdgePolicy::Reflect => {
                    let xi = fold_reflect4(sx, lanes.width).to_array();
                    let yi = fold_reflect4(sy, lanes.height).to_array();
                    for lane in 0..4u32 {
                        let src = ctx
                            .input
                            .pixel(xi[lane as usize] as u32, yi[lane as usize] as u32);
                        band.pixel_mut(x + lane, y).copy_from_slice(src);
                    }
                }
                EdgePolicy::Background { .. } => {
                    let xs = sx.to_array();
                    let ys = sy.to_array();
                    for lane in 0..4u32 {
                        write_sample(
                            ctx,
                            band,
                            x + lane,
                            y,
                            xs[lane as usize],
                            ys[lane as usize],
                        );
                    }
                }
            }
        }
    }
}

/// Resolve one rotated sample per the edge policy and write the output pixel.
fn write_sample(
    ctx: &RenderContext<'_>,
    band: &mut BandMut<'_>,
    x: u32,
    y: u32,
    source_x: f32,
    source_y: f32,
) {
    let w = ctx.layout.width as f32;
    let h = ctx.layout.height as f32;
    match ctx.policy {
        EdgePolicy::Reflect => {
            let xi = fold_reflect(source_x, w);
            let yi = fold_reflect(source_y, h);
            band.pixel_mut(x, y).copy_from_slice(ctx.input.pixel(xi, yi));
        }
        EdgePolicy::Background { color, threshold } => {
            match resolve_clamped(source_x, source_y, w, h, threshold) {
                Some((xi, yi)) => {
                    band.pixel_mut(x, y).copy_from_slice(ctx.input.pixel(xi, yi));
                }
                None => {
                    if let Some(color) = color {
                        band.pixel_mut(x, y).copy_from_slice(color);
                    }
                    // No background configured: leave the pixel as it was.
                }
            }
        }
    }
}

/// Vectorized tessellated-reflection fold, same operation order as
/// [`fold_reflect`].
fn fold_reflect4(v: f32x4, dim: f32x4) -> i32x4 {
    let a = v.abs();
    let over = a.cmp_ge(dim);
    let folded = over.blend(dim - (a - dim), a);
    folded.min(dim - f32x4::ONE).max(f32x4::ZERO).trunc_int()
}

#[cfg(test)]
#[path = "../../tests/unit/render/block.rs"]
mod tests;
