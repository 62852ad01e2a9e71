//! Bounds-checked views over caller-owned frame buffers.
//!
//! The engine never allocates or frees frame memory; callers pass raw byte
//! slices and a [`FrameLayout`] describing their shape. All pixel addressing
//! goes through [`FrameView`]/[`BandMut`] so the offset arithmetic lives in
//! exactly one place and is debug-asserted.

use crate::foundation::error::{KaleidoError, KaleidoResult};

/// Memory layout of a frame buffer: dimensions, component shape, and stride.
///
/// Width and height are fixed for the lifetime of an engine instance because
/// the SIMD lane constants are derived from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameLayout {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Size of one pixel component in bytes (1 for 8-bit, 2 for 16-bit, ...).
    pub component_size: u32,
    /// Number of components per pixel (3 for RGB, 4 for RGBA, ...).
    pub num_components: u32,
    /// Distance between the starts of consecutive rows, in bytes.
    pub stride: u32,
}

impl FrameLayout {
    /// Validated constructor. `stride == 0` means tightly packed rows.
    pub fn new(
        width: u32,
        height: u32,
        component_size: u32,
        num_components: u32,
        stride: u32,
    ) -> KaleidoResult<Self> {
        if width == 0 || height == 0 {
            return Err(KaleidoError::invalid_parameter(
                "frame dimensions must be non-zero",
            ));
        }
        if component_size == 0 || num_components == 0 {
            return Err(KaleidoError::invalid_parameter(
                "pixel component shape must be non-zero",
            ));
        }
        let row_bytes = width * component_size * num_components;
        let stride = if stride == 0 { row_bytes } else { stride };
        if stride < row_bytes {
            return Err(KaleidoError::invalid_parameter(format!(
                "stride {stride} does not cover a row of {row_bytes} bytes"
            )));
        }
        Ok(Self {
            width,
            height,
            component_size,
            num_components,
            stride,
        })
    }

    /// Size of one pixel in bytes.
    pub fn pixel_size(self) -> usize {
        (self.component_size * self.num_components) as usize
    }

    /// Number of payload bytes in one row (excluding stride padding).
    pub fn row_bytes(self) -> usize {
        self.width as usize * self.pixel_size()
    }

    /// Minimum buffer length for a frame with this layout.
    ///
    /// The final row does not need stride padding after it.
    pub fn required_len(self) -> usize {
        (self.height as usize - 1) * self.stride as usize + self.row_bytes()
    }

    /// Width/height ratio used to measure angles in a normalized square space.
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Shared read view over an input frame. Cheap to copy across band workers.
#[derive(Clone, Copy)]
pub(crate) struct FrameView<'a> {
    layout: FrameLayout,
    data: &'a [u8],
}

impl<'a> FrameView<'a> {
    pub(crate) fn new(layout: FrameLayout, data: &'a [u8]) -> KaleidoResult<Self> {
        if data.len() < layout.required_len() {
            return Err(KaleidoError::invalid_parameter(format!(
                "input frame is {} bytes, layout requires {}",
                data.len(),
                layout.required_len()
            )));
        }
        Ok(Self { layout, data })
    }

    /// Bytes of the pixel at `(x, y)`.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> &'a [u8] {
        debug_assert!(x < self.layout.width && y < self.layout.height);
        let off = y as usize * self.layout.stride as usize + x as usize * self.layout.pixel_size();
        &self.data[off..off + self.layout.pixel_size()]
    }
}

/// Exclusive write view over a contiguous range of output rows.
///
/// Bands are disjoint slices of the output buffer, so concurrent band workers
/// need no synchronization beyond the final join.
pub(crate) struct BandMut<'a> {
    layout: FrameLayout,
    y_start: u32,
    y_end: u32, // exclusive
    data: &'a mut [u8],
}

impl BandMut<'_> {
    /// Absolute output rows covered by this band.
    pub(crate) fn rows(&self) -> std::ops::Range<u32> {
        self.y_start..self.y_end
    }

    /// Mutable bytes of the pixel at absolute coordinates `(x, y)`.
    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        debug_assert!(x < self.layout.width && self.rows().contains(&y));
        let off = (y - self.y_start) as usize * self.layout.stride as usize
            + x as usize * self.layout.pixel_size();
        &mut self.data[off..off + self.layout.pixel_size()]
    }
}

/// Partition an output buffer into `n` contiguous horizontal bands.
///
/// Bands get `height / n` rows each; the last band absorbs the remainder.
/// Zero-height bands (when `n > height`) are skipped.
pub(crate) fn split_bands(layout: FrameLayout, data: &mut [u8], n: u32) -> Vec<BandMut<'_>> {
    debug_assert!(n >= 1);
    debug_assert!(data.len() >= layout.required_len());

    let base = layout.height / n;
    let mut bands = Vec::with_capacity(n as usize);
    let mut rest = data;
    let mut y = 0;
    for i in 0..n {
        let rows = if i == n - 1 {
            layout.height - base * (n - 1)
        } else {
            base
        };
        if rows == 0 {
            continue;
        }
        let band_data = if i == n - 1 {
            std::mem::take(&mut rest)
        } else {
            let (head, tail) = std::mem::take(&mut rest)
                .split_at_mut(rows as usize * layout.stride as usize);
            rest = tail;
            head
        };
        bands.push(BandMut {
            layout,
            y_start: y,
            y_end: y + rows,
            data: band_data,
        });
        y += rows;
    }
    bands
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/frame.rs"]
mod tests;
