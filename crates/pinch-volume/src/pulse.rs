use crate::{VolumeControl, VolumeError, VolumeLevel};
use libpulse_binding::callbacks::ListResult;
use libpulse_binding::context::{Context, FlagSet, State};
use libpulse_binding::mainloop::standard::{IterateResult, Mainloop};
use libpulse_binding::operation::{Operation, State as OperationState};
use libpulse_binding::volume::{ChannelVolumes, Volume};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Server-side alias that always resolves to the current default sink.
pub const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

/// Mainloop iterations allowed for the context to become ready.
const MAX_CONNECT_ITERATIONS: usize = 100;

/// Master volume of a PulseAudio sink.
///
/// Requests run on a private standard mainloop driven from the caller's
/// thread, so every call blocks until the server has answered. If the
/// context drops (server restart), the next call reconnects.
pub struct PulseVolume {
    context: Context,
    mainloop: Mainloop,
    sink: String,
}

impl std::fmt::Debug for PulseVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulseVolume")
            .field("sink", &self.sink)
            .field("state", &self.context.get_state())
            .finish()
    }
}

impl PulseVolume {
    /// Connect to the server and control the default sink.
    pub fn new() -> Result<Self, VolumeError> {
        Self::with_sink(DEFAULT_SINK)
    }

    /// Connect to the server and control the sink named `sink`.
    ///
    /// # Errors
    ///
    /// Returns `VolumeError::Connection` if the server is unavailable or the
    /// connection does not become ready in time.
    pub fn with_sink(sink: &str) -> Result<Self, VolumeError> {
        let (mainloop, context) = connect()?;
        log::info!("connected to PulseAudio, controlling sink {sink}");
        Ok(Self {
            context,
            mainloop,
            sink: sink.to_string(),
        })
    }

    pub fn sink(&self) -> &str {
        &self.sink
    }

    fn ensure_connected(&mut self) -> Result<(), VolumeError> {
        if self.context.get_state() == State::Ready {
            return Ok(());
        }
        log::info!("PulseAudio context is {:?}, reconnecting", self.context.get_state());
        let (mainloop, context) = connect()?;
        self.context.disconnect();
        self.context = context;
        self.mainloop = mainloop;
        Ok(())
    }

    fn sink_volume(&mut self) -> Result<ChannelVolumes, VolumeError> {
        self.ensure_connected()?;

        let found: Rc<RefCell<Option<ChannelVolumes>>> = Rc::new(RefCell::new(None));
        let found_clone = Rc::clone(&found);

        let introspect = self.context.introspect();
        let op = introspect.get_sink_info_by_name(&self.sink, move |result| {
            if let ListResult::Item(info) = result {
                *found_clone.borrow_mut() = Some(info.volume);
            }
        });
        wait_for(&mut self.mainloop, &op)?;

        let volume = *found.borrow();
        volume.ok_or_else(|| VolumeError::Device(format!("sink {} not found", self.sink)))
    }
}

impl VolumeControl for PulseVolume {
    fn volume(&mut self) -> Result<VolumeLevel, VolumeError> {
        let channels = self.sink_volume()?;
        Ok(level_from_volume(channels.avg()))
    }

    fn set_volume(&mut self, level: VolumeLevel) -> Result<(), VolumeError> {
        // channel count can change when the default sink is swapped
        let mut channels = self.sink_volume()?;
        let count = channels.len();
        channels.set(count, volume_from_level(level));

        let success = Rc::new(Cell::new(false));
        let success_clone = Rc::clone(&success);

        let mut introspect = self.context.introspect();
        let op = introspect.set_sink_volume_by_name(
            &self.sink,
            &channels,
            Some(Box::new(move |ok| success_clone.set(ok))),
        );
        wait_for(&mut self.mainloop, &op)?;

        if success.get() {
            Ok(())
        } else {
            Err(VolumeError::Operation(format!(
                "server rejected volume {level} for sink {}",
                self.sink
            )))
        }
    }
}

impl Drop for PulseVolume {
    fn drop(&mut self) {
        self.context.disconnect();
    }
}

fn connect() -> Result<(Mainloop, Context), VolumeError> {
    let mut mainloop = Mainloop::new().ok_or_else(|| {
        VolumeError::Connection("failed to create PulseAudio mainloop".to_string())
    })?;

    let mut context = Context::new(&mainloop, "pinch")
        .ok_or_else(|| VolumeError::Connection("failed to create PulseAudio context".to_string()))?;

    context
        .connect(None, FlagSet::NOFLAGS, None)
        .map_err(|e| VolumeError::Connection(format!("failed to connect to PulseAudio server: {e}")))?;

    for _ in 0..MAX_CONNECT_ITERATIONS {
        match mainloop.iterate(true) {
            IterateResult::Quit(_) | IterateResult::Err(_) => {
                return Err(VolumeError::Connection(
                    "PulseAudio mainloop error during connection".to_string(),
                ));
            }
            IterateResult::Success(_) => {}
        }

        match context.get_state() {
            State::Ready => return Ok((mainloop, context)),
            State::Failed | State::Terminated => {
                return Err(VolumeError::Connection(
                    "PulseAudio connection failed or terminated".to_string(),
                ));
            }
            _ => {}
        }
    }

    Err(VolumeError::Connection(
        "PulseAudio server unavailable or connection timed out".to_string(),
    ))
}

/// Drive `mainloop` until `op` completes.
fn wait_for<F: ?Sized>(mainloop: &mut Mainloop, op: &Operation<F>) -> Result<(), VolumeError> {
    loop {
        match mainloop.iterate(true) {
            IterateResult::Quit(_) | IterateResult::Err(_) => {
                return Err(VolumeError::Operation(
                    "PulseAudio mainloop error".to_string(),
                ));
            }
            IterateResult::Success(_) => {}
        }

        match op.get_state() {
            OperationState::Done => return Ok(()),
            OperationState::Cancelled => {
                return Err(VolumeError::Operation(
                    "PulseAudio operation cancelled".to_string(),
                ));
            }
            OperationState::Running => {}
        }
    }
}

/// Linear mapping: `Volume::NORMAL` is 1.0. Boosted volumes read as 1.0.
fn level_from_volume(volume: Volume) -> VolumeLevel {
    VolumeLevel::from_scalar(volume.0 as f32 / Volume::NORMAL.0 as f32)
}

fn volume_from_level(level: VolumeLevel) -> Volume {
    Volume((level.scalar() * Volume::NORMAL.0 as f32).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_volume_mapping_endpoints() {
        assert_eq!(volume_from_level(VolumeLevel::MUTED), Volume::MUTED);
        assert_eq!(volume_from_level(VolumeLevel::FULL), Volume::NORMAL);
        assert_eq!(level_from_volume(Volume::NORMAL), VolumeLevel::FULL);
    }

    #[test]
    fn test_level_volume_mapping_midpoint() {
        let half = volume_from_level(VolumeLevel::from_percent(50.0));
        assert_eq!(half.0, Volume::NORMAL.0 / 2);
        assert_eq!(level_from_volume(half), VolumeLevel::from_scalar(0.5));
    }

    #[test]
    fn test_boosted_volume_reads_as_full() {
        let boosted = Volume(Volume::NORMAL.0 * 3 / 2);
        assert_eq!(level_from_volume(boosted), VolumeLevel::FULL);
    }
}
