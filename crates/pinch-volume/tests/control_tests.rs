use pinch_volume::{MemoryVolume, VolumeControl, VolumeError, VolumeLevel};

#[test]
fn test_memory_volume_get_set() {
    let mut endpoint = MemoryVolume::new(VolumeLevel::from_percent(30.0));
    assert_eq!(endpoint.volume().unwrap(), VolumeLevel::from_percent(30.0));

    endpoint.set_volume(VolumeLevel::from_percent(75.0)).unwrap();
    assert_eq!(endpoint.volume().unwrap(), VolumeLevel::from_percent(75.0));
    assert_eq!(endpoint.set_calls(), 1);
}

#[test]
fn test_memory_volume_scripted_failures_keep_level() {
    let mut endpoint = MemoryVolume::new(VolumeLevel::from_percent(40.0)).with_failures(2);

    for _ in 0..2 {
        match endpoint.set_volume(VolumeLevel::FULL) {
            Err(VolumeError::Device(_)) => {}
            other => panic!("expected VolumeError::Device, got {:?}", other),
        }
    }
    assert_eq!(endpoint.level(), VolumeLevel::from_percent(40.0));

    endpoint.set_volume(VolumeLevel::FULL).unwrap();
    assert_eq!(endpoint.level(), VolumeLevel::FULL);
    assert_eq!(endpoint.set_calls(), 3);
}

#[test]
fn test_boxed_endpoint_dispatch() {
    let mut endpoint: Box<dyn VolumeControl> = Box::new(MemoryVolume::default());
    endpoint.set_volume(VolumeLevel::from_percent(20.0)).unwrap();
    assert_eq!(endpoint.volume().unwrap(), VolumeLevel::from_percent(20.0));
}

#[test]
fn test_error_display() {
    assert!(VolumeError::Connection("no server".into()).to_string().contains("no server"));
    assert!(VolumeError::Device("sink gone".into()).to_string().starts_with("device error"));
    assert!(VolumeError::Operation("cancelled".into()).to_string().starts_with("operation error"));
}

#[cfg(feature = "pulse")]
mod pulse_tests {
    use pinch_volume::{PulseVolume, VolumeError};

    #[test]
    fn test_pulse_volume_connects_or_reports_connection_error() {
        // depends on whether a PulseAudio server is reachable
        match PulseVolume::new() {
            Ok(endpoint) => assert_eq!(endpoint.sink(), "@DEFAULT_SINK@"),
            Err(VolumeError::Connection(_)) => {}
            Err(other) => panic!("expected VolumeError::Connection, got {:?}", other),
        }
    }
}
