use super::*;
use crate::geometry::config::GeometryConfig;

fn paint(layout: FrameLayout, config: &GeometryConfig) -> Vec<u8> {
    let map = ScreenMap::new(layout, config);
    let geom = SegmentGeometry::derive(config);
    let mut out = vec![0u8; layout.required_len()];
    paint_segments(layout, &map, &geom, &mut out);
    out
}

#[test]
fn palette_entries_are_distinct() {
    for (i, a) in SEGMENT_PALETTE.iter().enumerate() {
        for b in &SEGMENT_PALETTE[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn every_painted_pixel_is_a_palette_color_with_opaque_alpha() {
    let layout = FrameLayout::new(64, 64, 1, 4, 0).unwrap();
    let config = GeometryConfig {
        segmentation: 4,
        ..GeometryConfig::default()
    };
    let out = paint(layout, &config);
    for px in out.chunks_exact(4) {
        let rgb = [px[0], px[1], px[2]];
        assert!(SEGMENT_PALETTE.contains(&rgb), "{rgb:?} not in palette");
        assert_eq!(px[3], 0xFF);
    }
}

#[test]
fn source_wedge_is_painted_with_the_first_entry() {
    let layout = FrameLayout::new(64, 64, 1, 4, 0).unwrap();
    let config = GeometryConfig {
        segmentation: 2,
        source_segment_angle: Some(0.0),
        ..GeometryConfig::default()
    };
    let out = paint(layout, &config);
    // With the wedge anchored at angle 0, the positive x axis from the
    // center lies inside segment 0.
    for x in [40u32, 55, 63] {
        let off = (32 * layout.stride as usize) + x as usize * layout.pixel_size();
        assert_eq!(&out[off..off + 3], &SEGMENT_PALETTE[0]);
    }
}

#[test]
fn three_component_frames_are_supported() {
    let layout = FrameLayout::new(32, 32, 1, 3, 0).unwrap();
    let out = paint(layout, &GeometryConfig::default());
    for px in out.chunks_exact(3) {
        let rgb = [px[0], px[1], px[2]];
        assert!(SEGMENT_PALETTE.contains(&rgb));
    }
}

#[test]
fn high_segment_counts_wrap_around_the_palette() {
    let layout = FrameLayout::new(64, 64, 1, 4, 0).unwrap();
    let config = GeometryConfig {
        segmentation: 64, // 128 wedges, more than palette entries
        ..GeometryConfig::default()
    };
    let out = paint(layout, &config);
    for px in out.chunks_exact(4) {
        assert!(SEGMENT_PALETTE.contains(&[px[0], px[1], px[2]]));
    }
}
