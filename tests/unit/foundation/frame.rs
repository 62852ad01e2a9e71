use super::*;

#[test]
fn layout_rejects_degenerate_shapes() {
    assert!(FrameLayout::new(0, 4, 1, 4, 0).is_err());
    assert!(FrameLayout::new(4, 0, 1, 4, 0).is_err());
    assert!(FrameLayout::new(4, 4, 0, 4, 0).is_err());
    assert!(FrameLayout::new(4, 4, 1, 0, 0).is_err());
    // stride shorter than a row
    assert!(FrameLayout::new(4, 4, 1, 4, 15).is_err());
}

#[test]
fn zero_stride_means_tight_packing() {
    let layout = FrameLayout::new(4, 3, 1, 4, 0).unwrap();
    assert_eq!(layout.stride, 16);
    assert_eq!(layout.pixel_size(), 4);
    assert_eq!(layout.row_bytes(), 16);
    assert_eq!(layout.required_len(), 48);
}

#[test]
fn required_len_skips_padding_after_last_row() {
    let layout = FrameLayout::new(4, 3, 1, 4, 20).unwrap();
    assert_eq!(layout.required_len(), 2 * 20 + 16);
}

#[test]
fn view_honors_stride_padding() {
    let layout = FrameLayout::new(2, 2, 1, 3, 8).unwrap();
    let mut data = vec![0u8; layout.required_len()];
    data[8 + 3..8 + 6].copy_from_slice(&[9, 8, 7]);
    let view = FrameView::new(layout, &data).unwrap();
    assert_eq!(view.pixel(1, 1), &[9, 8, 7]);
}

#[test]
fn view_rejects_short_buffers() {
    let layout = FrameLayout::new(4, 4, 1, 4, 0).unwrap();
    let data = vec![0u8; layout.required_len() - 1];
    assert!(FrameView::new(layout, &data).is_err());
}

#[test]
fn bands_are_disjoint_and_cover_every_row() {
    let layout = FrameLayout::new(4, 10, 1, 4, 0).unwrap();
    let mut data = vec![0u8; layout.required_len()];

    let mut bands = split_bands(layout, &mut data, 3);
    let rows: Vec<_> = bands.iter().map(|b| b.rows()).collect();
    assert_eq!(rows, vec![0..3, 3..6, 6..10]); // last band absorbs remainder

    for (idx, band) in bands.iter_mut().enumerate() {
        for y in band.rows() {
            for x in 0..layout.width {
                band.pixel_mut(x, y).fill(idx as u8 + 1);
            }
        }
    }
    // Every byte was painted exactly once through its owning band.
    for y in 0..layout.height {
        let expected = match y {
            0..=2 => 1,
            3..=5 => 2,
            _ => 3,
        };
        let off = y as usize * layout.stride as usize;
        assert!(data[off..off + layout.row_bytes()].iter().all(|&b| b == expected));
    }
}

#[test]
fn zero_height_bands_are_skipped() {
    let layout = FrameLayout::new(4, 2, 1, 4, 0).unwrap();
    let mut data = vec![0u8; layout.required_len()];
    let bands = split_bands(layout, &mut data, 4);
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].rows(), 0..2);
}
