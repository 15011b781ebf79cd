//! Domain layer: the composite tree and the diagnostic events
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod events;
pub mod node;
pub mod render;

pub use events::{
    Device, DeviceEvent, Event, EventSink, RecordingSink, Scene, SceneEvent, SharedSink,
    TracingSink, TreeEvent,
};
pub use node::{AddOutcome, Directory, FileNode, Node, RemoveOutcome};
pub use render::{PreOrder, TreeNodeConvert, INDENT_MARKER};
