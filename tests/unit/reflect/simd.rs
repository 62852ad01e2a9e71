use super::*;
use crate::geometry::config::GeometryConfig;
use crate::reflect::scalar::{ScreenMap, reflect_info, rotate};

fn setup(config: &GeometryConfig) -> (FrameLayout, ScreenMap, SegmentGeometry, LaneConstants) {
    let layout = FrameLayout::new(64, 64, 1, 4, 0).unwrap();
    let map = ScreenMap::new(layout, config);
    let geom = SegmentGeometry::derive(config);
    let lanes = LaneConstants::new(layout, &map, &geom);
    (layout, map, geom, lanes)
}

#[test]
fn lanes_classify_pixels_like_the_scalar_path() {
    let config = GeometryConfig {
        origin: (0.3, 0.7),
        segmentation: 5,
        ..GeometryConfig::default()
    };
    let (layout, map, geom, lanes) = setup(&config);

    for y in 0..layout.height {
        for x in (0..layout.width).step_by(4) {
            let info = reflect_info4(&lanes, x, y);
            let segments = info.segment_i.to_array();
            for lane in 0..4 {
                let scalar = reflect_info(&map, &geom, x + lane as u32, y);
                assert_eq!(
                    segments[lane] as u32,
                    scalar.segment,
                    "segment mismatch at ({}, {y})",
                    x + lane as u32
                );
            }
        }
    }
}

#[test]
fn lanes_rotate_like_the_scalar_path() {
    let config = GeometryConfig {
        origin: (0.3, 0.7),
        segmentation: 5,
        ..GeometryConfig::default()
    };
    let (layout, map, geom, lanes) = setup(&config);

    for y in (0..layout.height).step_by(3) {
        for x in (0..layout.width).step_by(4) {
            let (sx, sy) = rotate4(&lanes, x, y);
            let xs = sx.to_array();
            let ys = sy.to_array();
            for lane in 0..4 {
                let scalar = reflect_info(&map, &geom, x + lane as u32, y);
                if scalar.segment == 0 {
                    continue; // the scalar path copies directly instead
                }
                let (rx, ry) = rotate(&map, &geom, &scalar);
                assert!((xs[lane] - rx).abs() < 1e-4, "x at ({}, {y})", x + lane as u32);
                assert!((ys[lane] - ry).abs() < 1e-4, "y at ({}, {y})", x + lane as u32);
            }
        }
    }
}

#[test]
fn origin_lane_is_segment_zero_and_maps_to_itself() {
    let config = GeometryConfig {
        origin: (0.5, 0.5),
        segmentation: 4,
        ..GeometryConfig::default()
    };
    let (_, _, _, lanes) = setup(&config);

    let info = reflect_info4(&lanes, 32, 32);
    assert_eq!(info.segment_i.to_array()[0], 0);

    let (sx, sy) = rotate4(&lanes, 32, 32);
    assert_eq!(sx.to_array()[0], 32.0);
    assert_eq!(sy.to_array()[0], 32.0);
}

#[test]
fn segment_zero_lanes_round_trip_exactly_for_exact_origins() {
    // With a representable pixel-space origin the masked zero rotation must
    // reproduce the lane's own coordinates bit for bit.
    let config = GeometryConfig {
        origin: (0.25, 0.25),
        segmentation: 2,
        source_segment_angle: Some(0.0),
        ..GeometryConfig::default()
    };
    let (_, map, geom, lanes) = setup(&config);

    // (20..24, 16) sits on the positive x axis from the origin (16, 16).
    let scalar = reflect_info(&map, &geom, 20, 16);
    assert_eq!(scalar.segment, 0);

    let (sx, sy) = rotate4(&lanes, 20, 16);
    assert_eq!(sx.to_array(), [20.0, 21.0, 22.0, 23.0]);
    assert_eq!(sy.to_array(), [16.0, 16.0, 16.0, 16.0]);
}
