//! Application layer: the demonstration driver
//!
//! This layer wires the tree and the facade into the fixed demo scenario.

pub mod demo;
pub mod error;
pub mod error_ext;

pub use demo::{render_tree, run_composite_demo, run_facade_demo, CompositeReport, SampleTree};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
