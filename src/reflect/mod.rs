//! Reflect-info calculation and the rotate/reflect coordinate transform,
//! in scalar and 4-wide SIMD forms.
//!
//! Both paths share one set of trig kernels (the `wide` implementations, the
//! scalar path evaluating lane 0 of a splat), so they classify every pixel
//! into the same segment and produce bit-identical sample coordinates for
//! the same input.

pub mod scalar;
pub mod simd;

use wide::f32x4;

/// `atan2` through the shared 4-lane kernel.
pub(crate) fn atan2f(y: f32, x: f32) -> f32 {
    f32x4::splat(y).atan2(f32x4::splat(x)).to_array()[0]
}

/// `sin` through the shared 4-lane kernel.
pub(crate) fn sinf(a: f32) -> f32 {
    f32x4::splat(a).sin().to_array()[0]
}

/// `cos` through the shared 4-lane kernel.
pub(crate) fn cosf(a: f32) -> f32 {
    f32x4::splat(a).cos().to_array()[0]
}
