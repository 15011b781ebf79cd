//! Home theater devices
//!
//! Each device tracks its own power state and reports every operation to the
//! sink. Repeating an operation is a no-op with its own diagnostic.

use tracing::instrument;

use crate::domain::{Device, DeviceEvent, SharedSink};

pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 100;
pub const DEFAULT_CHANNEL: &str = "1";
pub const INITIAL_VOLUME: u8 = 20;

/// Clamp an arbitrary request into `MIN_VOLUME..=MAX_VOLUME`.
pub fn clamp_volume(volume: i32) -> u8 {
    volume.clamp(i32::from(MIN_VOLUME), i32::from(MAX_VOLUME)) as u8
}

/// Shared on/off bookkeeping.
#[derive(Debug)]
struct Power {
    device: Device,
    on: bool,
}

impl Power {
    fn new(device: Device) -> Self {
        Self { device, on: false }
    }

    fn turn_on(&mut self, sink: &SharedSink) {
        if self.on {
            sink.emit(DeviceEvent::AlreadyOn(self.device).into());
        } else {
            self.on = true;
            sink.emit(DeviceEvent::PoweredOn(self.device).into());
        }
    }

    fn turn_off(&mut self, sink: &SharedSink) {
        if self.on {
            self.on = false;
            sink.emit(DeviceEvent::PoweredOff(self.device).into());
        } else {
            sink.emit(DeviceEvent::AlreadyOff(self.device).into());
        }
    }
}

#[derive(Debug)]
pub struct Tv {
    power: Power,
    channel: String,
    sink: SharedSink,
}

impl Tv {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            power: Power::new(Device::Tv),
            channel: DEFAULT_CHANNEL.to_string(),
            sink,
        }
    }

    pub fn is_on(&self) -> bool {
        self.power.on
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn turn_on(&mut self) {
        self.power.turn_on(&self.sink);
    }

    pub fn turn_off(&mut self) {
        self.power.turn_off(&self.sink);
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_channel(&mut self, channel: &str) {
        self.channel = channel.to_string();
        self.sink
            .emit(DeviceEvent::ChannelSet(self.channel.clone()).into());
    }
}

#[derive(Debug)]
pub struct AudioSystem {
    power: Power,
    volume: u8,
    sink: SharedSink,
}

impl AudioSystem {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            power: Power::new(Device::Audio),
            volume: INITIAL_VOLUME,
            sink,
        }
    }

    pub fn is_on(&self) -> bool {
        self.power.on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn turn_on(&mut self) {
        self.power.turn_on(&self.sink);
    }

    pub fn turn_off(&mut self) {
        self.power.turn_off(&self.sink);
    }

    /// Set the volume, clamped to 0..=100.
    #[instrument(level = "trace", skip(self))]
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = clamp_volume(volume);
        self.sink.emit(DeviceEvent::VolumeSet(self.volume).into());
    }
}

#[derive(Debug)]
pub struct DvdPlayer {
    playing: bool,
    sink: SharedSink,
}

impl DvdPlayer {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            playing: false,
            sink,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        if self.playing {
            self.sink.emit(DeviceEvent::AlreadyPlaying.into());
        } else {
            self.playing = true;
            self.sink.emit(DeviceEvent::Playing.into());
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.sink.emit(DeviceEvent::Paused.into());
        } else {
            self.sink.emit(DeviceEvent::NothingToPause.into());
        }
    }

    /// Stops playback; reports `Stopped` even when nothing was playing.
    pub fn stop(&mut self) {
        self.playing = false;
        self.sink.emit(DeviceEvent::Stopped.into());
    }
}

#[derive(Debug)]
pub struct GameConsole {
    power: Power,
    sink: SharedSink,
}

impl GameConsole {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            power: Power::new(Device::Console),
            sink,
        }
    }

    pub fn is_on(&self) -> bool {
        self.power.on
    }

    pub fn turn_on(&mut self) {
        self.power.turn_on(&self.sink);
    }

    pub fn turn_off(&mut self) {
        self.power.turn_off(&self.sink);
    }

    /// Powers the console on first if needed.
    #[instrument(level = "trace", skip(self))]
    pub fn start_game(&mut self, name: &str) {
        if !self.is_on() {
            self.turn_on();
        }
        self.sink
            .emit(DeviceEvent::GameStarted(name.to_string()).into());
    }
}
