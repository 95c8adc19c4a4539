use pinch_volume::VolumeLevel;

#[test]
fn test_scalar_and_percent_mirror_each_other() {
    let level = VolumeLevel::from_percent(50.0);
    assert_eq!(level.scalar(), 0.5);
    assert_eq!(level.percent(), 50.0);
    assert_eq!(VolumeLevel::from_scalar(0.25).percent(), 25.0);
}

#[test]
fn test_out_of_range_values_clamp() {
    assert_eq!(VolumeLevel::from_percent(130.0), VolumeLevel::FULL);
    assert_eq!(VolumeLevel::from_scalar(-0.2), VolumeLevel::MUTED);
    assert_eq!(VolumeLevel::from_scalar(f32::NAN), VolumeLevel::MUTED);
}

#[test]
fn test_default_is_muted() {
    assert_eq!(VolumeLevel::default(), VolumeLevel::MUTED);
}

#[test]
fn test_display_rounds_percent() {
    assert_eq!(VolumeLevel::from_percent(49.6).to_string(), "50%");
    assert_eq!(VolumeLevel::FULL.to_string(), "100%");
}

#[test]
fn test_ordering() {
    assert!(VolumeLevel::from_percent(10.0) < VolumeLevel::from_percent(90.0));
}
