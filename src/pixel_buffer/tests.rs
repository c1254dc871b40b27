use super::*;

#[test]
fn write_red_to_zeroed_pixel() {
    let mut buf = [0u8; 4];
    write_color(&mut buf, Color::new(1.0, 0.0, 0.0), 0);
    assert_eq!(buf, [255, 0, 0, 255]);
}

#[test]
fn write_black_keeps_alpha_opaque() {
    let mut buf = [7u8; 4];
    write_color(&mut buf, Color::BLACK, 0);
    assert_eq!(buf, [0, 0, 0, 255]);
}

#[test]
fn write_at_offset_leaves_neighbours() {
    let mut buf = [9u8; 12];
    write_color(&mut buf, Color::new(0.5, 0.25, 1.0), 4);
    assert_eq!(&buf[..4], &[9, 9, 9, 9]);
    assert_eq!(&buf[4..8], &[127, 63, 255, 255]);
    assert_eq!(&buf[8..], &[9, 9, 9, 9]);
}

#[test]
#[should_panic]
fn write_past_end_panics() {
    let mut buf = [0u8; 6];
    write_color(&mut buf, Color::WHITE, 3);
}

#[test]
fn channel_conversion() {
    assert_eq!(channel_to_byte(0.0), 0);
    assert_eq!(channel_to_byte(1.0), 255);
    assert_eq!(channel_to_byte(0.25), 63);
    assert_eq!(channel_to_byte(0.999), 255);
    assert_eq!(channel_to_byte(1.5), 255);
    assert_eq!(channel_to_byte(-0.5), 0);
    assert_eq!(channel_to_byte(f64::NAN), 0);
}

#[test]
fn new_buffer_is_zeroed_rgba() {
    let buf = PixelBuffer::new(3, 2);
    assert_eq!(buf.len(), 3 * 2 * 4);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(buf.dimensions(), Dimensions::new(3, 2));
}

#[test]
fn try_new_rejects_overflowing_size() {
    assert!(PixelBuffer::try_new(u32::MAX, u32::MAX).is_none());
    assert_eq!(PixelBuffer::try_new(3, 2), Some(PixelBuffer::new(3, 2)));
    assert_eq!(Dimensions::new(u32::MAX, u32::MAX).byte_len(CHANNELS), None);
    assert_eq!(Dimensions::new(3, 2).byte_len(CHANNELS), Some(24));
}

#[test]
fn from_raw_checks_length() {
    assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_some());
    assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_none());
    assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_none());
    assert!(PixelBuffer::from_raw(u32::MAX, u32::MAX, vec![0; 16]).is_none());
}

#[test]
fn set_pixel_row_major() {
    let mut buf = PixelBuffer::new(3, 2);
    buf.set_pixel(1, 2, Color::WHITE);

    assert_eq!(buf.pixel(1, 2), [255, 255, 255, 255]);
    assert_eq!(&buf.as_bytes()[20..24], &[255, 255, 255, 255]);
    assert_eq!(buf.pixels().filter(|px| px[3] == 255).count(), 1);
}

#[test]
#[should_panic]
fn set_pixel_out_of_range_panics() {
    let mut buf = PixelBuffer::new(3, 2);
    buf.set_pixel(2, 0, Color::WHITE);
}

#[test]
#[should_panic]
fn pixel_col_out_of_range_panics() {
    let buf = PixelBuffer::new(3, 2);
    buf.pixel(0, 3);
}
