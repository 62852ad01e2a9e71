use super::*;
use std::f32::consts::{FRAC_PI_4, FRAC_PI_8, TAU};

fn config() -> GeometryConfig {
    GeometryConfig::default()
}

#[test]
fn segment_widths_sum_to_full_circle() {
    for segmentation in [1, 2, 4, 16, 33] {
        for direction in [Direction::Clockwise, Direction::Anticlockwise, Direction::None] {
            let geom = SegmentGeometry::derive(&GeometryConfig {
                segmentation,
                segment_direction: direction,
                ..config()
            });
            assert_eq!(geom.n_segments, 2 * segmentation);
            assert!((geom.segment_width * geom.n_segments as f32 - TAU).abs() < 1e-4);
        }
    }
}

#[test]
fn explicit_angle_overrides_corner_search() {
    let geom = SegmentGeometry::derive(&GeometryConfig {
        source_segment_angle: Some(0.7),
        ..config()
    });
    assert_eq!(geom.start_angle, -0.7);
}

#[test]
fn farthest_corner_wins_from_offset_origin() {
    // From (0.1, 0.1) the bottom-right corner is strictly farthest, whatever
    // corner the search starts at.
    for preferred in [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ] {
        let geom = SegmentGeometry::derive(&GeometryConfig {
            origin: (0.1, 0.1),
            preferred_corner: preferred,
            ..config()
        });
        assert!((geom.start_angle - FRAC_PI_4).abs() < 1e-6);
    }
}

#[test]
fn equidistant_corners_keep_the_preferred_one() {
    // A centered origin makes all four corners tie.
    let br = SegmentGeometry::derive(&GeometryConfig {
        preferred_corner: Corner::BottomRight,
        ..config()
    });
    assert!((br.start_angle - FRAC_PI_4).abs() < 1e-6);

    let tl = SegmentGeometry::derive(&GeometryConfig {
        preferred_corner: Corner::TopLeft,
        ..config()
    });
    assert!((tl.start_angle + 3.0 * FRAC_PI_4).abs() < 1e-6);

    let tr = SegmentGeometry::derive(&GeometryConfig {
        preferred_corner: Corner::TopRight,
        corner_search_direction: Direction::Anticlockwise,
        ..config()
    });
    assert!((tr.start_angle + FRAC_PI_4).abs() < 1e-6);
}

#[test]
fn segment_direction_offsets_by_half_a_wedge() {
    let base = SegmentGeometry::derive(&GeometryConfig {
        segmentation: 4,
        ..config()
    });
    let cw = SegmentGeometry::derive(&GeometryConfig {
        segmentation: 4,
        segment_direction: Direction::Clockwise,
        ..config()
    });
    let acw = SegmentGeometry::derive(&GeometryConfig {
        segmentation: 4,
        segment_direction: Direction::Anticlockwise,
        ..config()
    });
    assert!((cw.start_angle - (base.start_angle + FRAC_PI_8)).abs() < 1e-6);
    assert!((acw.start_angle - (base.start_angle - FRAC_PI_8)).abs() < 1e-6);
}

#[test]
fn derivation_is_idempotent() {
    let config = GeometryConfig {
        origin: (0.3, 0.8),
        segmentation: 7,
        segment_direction: Direction::Clockwise,
        ..config()
    };
    assert_eq!(
        SegmentGeometry::derive(&config),
        SegmentGeometry::derive(&config)
    );
}
