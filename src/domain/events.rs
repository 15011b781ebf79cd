//! Diagnostic events and the sinks that observe them
//!
//! Every state transition of the tree or of a device is reported as an
//! [`Event`]. Where the events end up (log, console, test buffer) is decided
//! by the [`EventSink`] handed to the emitting component.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{info, warn};

/// Shared handle to a sink. Components are single-threaded, so `Rc` suffices.
pub type SharedSink = Rc<dyn EventSink>;

/// Something that happened to a directory's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    Added { directory: String, child: String },
    /// Same handle or same name already present
    DuplicateRejected { directory: String, child: String },
    /// The child is the directory itself or one of its ancestors
    CycleRejected { directory: String, child: String },
    Removed { directory: String, child: String },
    NotFound { directory: String, child: String },
}

/// The four devices behind the home theater facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Tv,
    Audio,
    Dvd,
    Console,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Tv => write!(f, "TV"),
            Device::Audio => write!(f, "AudioSystem"),
            Device::Dvd => write!(f, "DVDPlayer"),
            Device::Console => write!(f, "GameConsole"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    PoweredOn(Device),
    AlreadyOn(Device),
    PoweredOff(Device),
    AlreadyOff(Device),
    ChannelSet(String),
    VolumeSet(u8),
    Playing,
    AlreadyPlaying,
    Paused,
    NothingToPause,
    Stopped,
    GameStarted(String),
}

/// High-level facade operations, used for the begin/ready banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Movie,
    EndMovie,
    Game,
    Music,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    Begin(Scene),
    Ready(Scene),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tree(TreeEvent),
    Device(DeviceEvent),
    Scene(SceneEvent),
}

impl Event {
    /// True for diagnostics reporting a rejected or ineffective request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Event::Tree(TreeEvent::DuplicateRejected { .. })
                | Event::Tree(TreeEvent::CycleRejected { .. })
                | Event::Tree(TreeEvent::NotFound { .. })
                | Event::Device(DeviceEvent::AlreadyOn(_))
                | Event::Device(DeviceEvent::AlreadyOff(_))
                | Event::Device(DeviceEvent::AlreadyPlaying)
                | Event::Device(DeviceEvent::NothingToPause)
        )
    }
}

impl From<TreeEvent> for Event {
    fn from(e: TreeEvent) -> Self {
        Event::Tree(e)
    }
}

impl From<DeviceEvent> for Event {
    fn from(e: DeviceEvent) -> Self {
        Event::Device(e)
    }
}

impl From<SceneEvent> for Event {
    fn from(e: SceneEvent) -> Self {
        Event::Scene(e)
    }
}

impl fmt::Display for TreeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeEvent::Added { directory, child } => {
                write!(f, "Directory '{directory}': added '{child}'")
            }
            TreeEvent::DuplicateRejected { directory, child } => write!(
                f,
                "Directory '{directory}': '{child}' already exists, add cancelled"
            ),
            TreeEvent::CycleRejected { directory, child } => write!(
                f,
                "Directory '{directory}': '{child}' contains this directory, add cancelled"
            ),
            TreeEvent::Removed { directory, child } => {
                write!(f, "Directory '{directory}': removed '{child}'")
            }
            TreeEvent::NotFound { directory, child } => write!(
                f,
                "Directory '{directory}': '{child}' not found, remove cancelled"
            ),
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceEvent::PoweredOn(d) => write!(f, "{d}: on"),
            DeviceEvent::AlreadyOn(d) => write!(f, "{d}: already on"),
            DeviceEvent::PoweredOff(d) => write!(f, "{d}: off"),
            DeviceEvent::AlreadyOff(d) => write!(f, "{d}: already off"),
            DeviceEvent::ChannelSet(c) => write!(f, "{}: channel set to {c}", Device::Tv),
            DeviceEvent::VolumeSet(v) => write!(f, "{}: volume set to {v}", Device::Audio),
            DeviceEvent::Playing => write!(f, "{}: playing", Device::Dvd),
            DeviceEvent::AlreadyPlaying => write!(f, "{}: already playing", Device::Dvd),
            DeviceEvent::Paused => write!(f, "{}: paused", Device::Dvd),
            DeviceEvent::NothingToPause => write!(f, "{}: nothing to pause", Device::Dvd),
            DeviceEvent::Stopped => write!(f, "{}: stopped", Device::Dvd),
            DeviceEvent::GameStarted(name) => {
                write!(f, "{}: starting game '{name}'", Device::Console)
            }
        }
    }
}

impl fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SceneEvent::Begin(Scene::Movie) => "--- Preparing to watch a movie ---",
            SceneEvent::Ready(Scene::Movie) => "--- Enjoy the movie ---",
            SceneEvent::Begin(Scene::EndMovie) => "--- Ending the movie ---",
            SceneEvent::Ready(Scene::EndMovie) => "--- System off ---",
            SceneEvent::Begin(Scene::Game) => "--- Preparing to play ---",
            SceneEvent::Ready(Scene::Game) => "--- Have fun ---",
            SceneEvent::Begin(Scene::Music) => "--- Switching to music mode ---",
            SceneEvent::Ready(Scene::Music) => "--- Music is playing ---",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Tree(e) => write!(f, "{e}"),
            Event::Device(e) => write!(f, "{e}"),
            Event::Scene(e) => write!(f, "{e}"),
        }
    }
}

/// Observer receiving diagnostic events.
pub trait EventSink: fmt::Debug {
    fn emit(&self, event: Event);
}

/// Forwards events to `tracing`: rejections as warnings, the rest as info.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn shared() -> SharedSink {
        Rc::new(TracingSink)
    }
}

impl EventSink for TracingSink {
    fn emit(&self, event: Event) {
        if event.is_rejection() {
            warn!("{event}");
        } else {
            info!("{event}");
        }
    }
}

/// Keeps every event in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Drain recorded events, leaving the sink empty.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn last(&self) -> Option<Event> {
        self.events.borrow().last().cloned()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_recording_sink_when_emitting_then_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(DeviceEvent::PoweredOn(Device::Tv).into());
        sink.emit(DeviceEvent::VolumeSet(10).into());

        assert_eq!(
            sink.take(),
            vec![
                Event::Device(DeviceEvent::PoweredOn(Device::Tv)),
                Event::Device(DeviceEvent::VolumeSet(10)),
            ]
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn given_tree_events_when_displayed_then_names_directory_and_child() {
        let event = Event::from(TreeEvent::DuplicateRejected {
            directory: "photos".into(),
            child: "vacation1.jpg".into(),
        });
        assert_eq!(
            event.to_string(),
            "Directory 'photos': 'vacation1.jpg' already exists, add cancelled"
        );
        assert!(event.is_rejection());
    }

    #[test]
    fn given_device_events_when_displayed_then_uses_device_names() {
        assert_eq!(
            DeviceEvent::AlreadyOff(Device::Audio).to_string(),
            "AudioSystem: already off"
        );
        assert_eq!(
            DeviceEvent::GameStarted("Tetris".into()).to_string(),
            "GameConsole: starting game 'Tetris'"
        );
        assert!(!Event::from(DeviceEvent::Stopped).is_rejection());
    }
}
