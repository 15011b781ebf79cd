//! hometree: a home theater facade and a composite file tree.
//!
//! - [`domain`]: the composite tree (`Node`, `Directory`, `FileNode`) and
//!   the diagnostic events it reports
//! - [`facade`]: four devices behind `HomeTheaterFacade`
//! - [`application`]: the demonstration scenario
//! - [`cli`]: argument parsing, dispatch and console narration

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod facade;
pub mod util;
