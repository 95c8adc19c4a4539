use image::{ImageBuffer, Rgb};
use pinch_camera::{CameraError, decode_mjpeg, yuyv_to_rgb};

#[test]
fn test_yuyv_grey_maps_to_grey() {
    // Y=128 with neutral chroma for two pixels
    let rgb = yuyv_to_rgb(&[128, 128, 128, 128], 2, 1).unwrap();
    assert_eq!(rgb, vec![128, 128, 128, 128, 128, 128]);
}

#[test]
fn test_yuyv_black_and_white() {
    let rgb = yuyv_to_rgb(&[0, 128, 255, 128], 2, 1).unwrap();
    assert_eq!(&rgb[0..3], &[0, 0, 0]);
    assert_eq!(&rgb[3..6], &[255, 255, 255]);
}

#[test]
fn test_yuyv_short_buffer() {
    assert!(yuyv_to_rgb(&[0u8; 7], 2, 2).is_none());
}

#[test]
fn test_decode_mjpeg_dimensions() {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(16, 8, Rgb([200, 40, 40]));
    let mut jpeg = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
        .unwrap();

    let frame = decode_mjpeg(&jpeg).unwrap();
    assert_eq!(frame.width(), 16);
    assert_eq!(frame.height(), 8);
    let [r, g, b] = frame.pixel(8, 4).unwrap();
    assert!(r > 150 && g < 90 && b < 90, "expected reddish pixel, got {r},{g},{b}");
}

#[test]
fn test_decode_mjpeg_rejects_garbage() {
    match decode_mjpeg(&[0xFF, 0xD8, 0x00, 0x01]) {
        Err(CameraError::Decode(_)) => {}
        other => panic!("expected CameraError::Decode, got {:?}", other),
    }
}
