//! Derives angular constants from a [`GeometryConfig`] (the initializer).

use crate::geometry::config::{Corner, Direction, GeometryConfig};

/// Corners in clockwise walk order (image coordinates, y grows downward).
const CORNER_WALK: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomRight,
    Corner::BottomLeft,
];

/// Angular constants derived from the configuration.
///
/// Recomputed lazily whenever the configuration changes; consistent with the
/// configuration for the whole duration of a `process` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentGeometry {
    /// Total number of wedges, `2 * segmentation` (always >= 2).
    pub n_segments: u32,
    /// Angular width of one wedge, `2π / n_segments`.
    pub segment_width: f32,
    /// Angle of the source segment's boundary (or center, for a
    /// corner-centered wedge), negated into the engine's screen convention.
    pub start_angle: f32,
}

impl SegmentGeometry {
    /// Compute the derived geometry. Pure and idempotent.
    pub fn derive(config: &GeometryConfig) -> Self {
        let n_segments = config.segmentation * 2;
        let segment_width = std::f32::consts::TAU / n_segments as f32;

        let start_angle = match config.source_segment_angle {
            Some(angle) => -angle,
            None => {
                let origin = kurbo::Point::new(
                    f64::from(config.origin.0),
                    f64::from(config.origin.1),
                );
                let corner = farthest_corner(
                    origin,
                    config.preferred_corner,
                    config.corner_search_direction,
                );
                let corner_angle = (corner.unit_point() - origin).atan2() as f32;
                corner_angle
                    - match config.segment_direction {
                        Direction::None => 0.0,
                        Direction::Clockwise => segment_width / -2.0,
                        Direction::Anticlockwise => segment_width / 2.0,
                    }
            }
        };

        Self {
            n_segments,
            segment_width,
            start_angle,
        }
    }
}

/// Walk the corners from `start` in `search_dir`, keeping the one with the
/// maximum squared distance from the origin. Ties keep the first corner
/// encountered, so the preferred corner wins ties.
fn farthest_corner(origin: kurbo::Point, start: Corner, search_dir: Direction) -> Corner {
    let step: isize = match search_dir {
        Direction::Anticlockwise => -1,
        _ => 1,
    };

    let start_idx = start.walk_index();
    let mut best = start_idx;
    let mut best_dist = origin.distance_squared(CORNER_WALK[start_idx].unit_point());
    let mut idx = inc_idx(start_idx, step);
    while idx != start_idx {
        let d = origin.distance_squared(CORNER_WALK[idx].unit_point());
        if d > best_dist {
            best_dist = d;
            best = idx;
        }
        idx = inc_idx(idx, step);
    }
    CORNER_WALK[best]
}

fn inc_idx(idx: usize, step: isize) -> usize {
    (idx as isize + step).rem_euclid(CORNER_WALK.len() as isize) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/segments.rs"]
mod tests;
