//! Facade layer: home theater devices behind scene-level operations

pub mod devices;
pub mod theater;

pub use devices::{clamp_volume, AudioSystem, DvdPlayer, GameConsole, Tv};
pub use theater::{GameOptions, HomeTheaterFacade, MovieOptions, MusicOptions};
