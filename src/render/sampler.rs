//! Turns a possibly out-of-bounds source coordinate into a sample position.

/// Edge-overflow policy applied to samples outside the frame.
#[derive(Clone, Copy, Debug)]
pub(crate) enum EdgePolicy<'a> {
    /// Fold the coordinate back into range by tessellated reflection.
    Reflect,
    /// Clamp near-misses within `threshold` pixels of an edge; otherwise
    /// write `color`, or leave the destination untouched when `color` is
    /// absent (the "transparent hole" mode).
    Background {
        color: Option<&'a [u8]>,
        threshold: f32,
    },
}

/// Fold an out-of-bounds coordinate back into `[0, dim)` as if the image were
/// mirror-tiled. One fold suffices for the transform's range; the final clamp
/// guards the fencepost at `dim`.
pub(crate) fn fold_reflect(coord: f32, dim: f32) -> u32 {
    let mut c = coord.abs();
    if c >= dim {
        c = dim - (c - dim);
    }
    c.min(dim - 1.0).max(0.0) as u32
}

/// Background-mode resolution: coordinates within `threshold` pixels of an
/// edge clamp to the nearest valid pixel; in-range coordinates sample
/// directly; everything else is background (`None`).
pub(crate) fn resolve_clamped(
    mut x: f32,
    mut y: f32,
    width: f32,
    height: f32,
    threshold: f32,
) -> Option<(u32, u32)> {
    if x < 0.0 && -x <= threshold {
        x = 0.0;
    } else if x >= width && x < width + threshold {
        x = width - 1.0;
    }
    if y < 0.0 && -y <= threshold {
        y = 0.0;
    } else if y >= height && y < height + threshold {
        y = height - 1.0;
    }

    if x >= 0.0 && x < width && y >= 0.0 && y < height {
        Some((x as u32, y as u32))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sampler.rs"]
mod tests;
