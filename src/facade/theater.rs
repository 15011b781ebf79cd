//! Home theater facade: one call per scene instead of a dozen device calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::{Scene, SceneEvent, SharedSink};
use crate::facade::devices::{AudioSystem, DvdPlayer, GameConsole, Tv, DEFAULT_CHANNEL};

pub const DEFAULT_MOVIE_VOLUME: i32 = 40;
pub const DEFAULT_GAME_VOLUME: i32 = 30;
pub const DEFAULT_MUSIC_VOLUME: i32 = 25;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MovieOptions {
    pub channel: String,
    pub volume: i32,
}

impl Default for MovieOptions {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            volume: DEFAULT_MOVIE_VOLUME,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameOptions {
    pub volume: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            volume: DEFAULT_GAME_VOLUME,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MusicOptions {
    pub volume: i32,
}

impl Default for MusicOptions {
    fn default() -> Self {
        Self {
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

/// Owns the four devices and sequences them per scene.
#[derive(Debug)]
pub struct HomeTheaterFacade {
    tv: Tv,
    audio: AudioSystem,
    dvd: DvdPlayer,
    console: GameConsole,
    sink: SharedSink,
}

impl HomeTheaterFacade {
    pub fn new(
        tv: Tv,
        audio: AudioSystem,
        dvd: DvdPlayer,
        console: GameConsole,
        sink: SharedSink,
    ) -> Self {
        Self {
            tv,
            audio,
            dvd,
            console,
            sink,
        }
    }

    /// Fresh devices, all reporting to `sink`.
    pub fn with_sink(sink: SharedSink) -> Self {
        Self::new(
            Tv::new(sink.clone()),
            AudioSystem::new(sink.clone()),
            DvdPlayer::new(sink.clone()),
            GameConsole::new(sink.clone()),
            sink,
        )
    }

    pub fn tv(&self) -> &Tv {
        &self.tv
    }

    pub fn audio(&self) -> &AudioSystem {
        &self.audio
    }

    pub fn dvd(&self) -> &DvdPlayer {
        &self.dvd
    }

    pub fn console(&self) -> &GameConsole {
        &self.console
    }

    #[instrument(level = "debug", skip(self))]
    pub fn watch_movie(&mut self, options: &MovieOptions) {
        self.begin(Scene::Movie);
        self.tv.turn_on();
        self.tv.set_channel(&options.channel);
        self.audio.turn_on();
        self.audio.set_volume(options.volume);
        self.dvd.play();
        self.ready(Scene::Movie);
    }

    #[instrument(level = "debug", skip(self))]
    pub fn end_movie(&mut self) {
        self.begin(Scene::EndMovie);
        self.dvd.stop();
        self.audio.turn_off();
        self.tv.turn_off();
        self.ready(Scene::EndMovie);
    }

    pub fn pause_movie(&mut self) {
        self.dvd.pause();
    }

    #[instrument(level = "debug", skip(self))]
    pub fn play_game(&mut self, game: &str, options: &GameOptions) {
        self.begin(Scene::Game);
        self.tv.turn_on();
        self.audio.turn_on();
        self.console.turn_on();
        self.console.start_game(game);
        self.audio.set_volume(options.volume);
        self.ready(Scene::Game);
    }

    #[instrument(level = "debug", skip(self))]
    pub fn listen_music(&mut self, options: &MusicOptions) {
        self.begin(Scene::Music);
        // the TV acts as the music source
        self.tv.turn_on();
        self.audio.turn_on();
        self.audio.set_volume(options.volume);
        self.ready(Scene::Music);
    }

    pub fn set_volume(&mut self, volume: i32) {
        self.audio.set_volume(volume);
    }

    fn begin(&self, scene: Scene) {
        debug!(?scene, "scene begins");
        self.sink.emit(SceneEvent::Begin(scene).into());
    }

    fn ready(&self, scene: Scene) {
        self.sink.emit(SceneEvent::Ready(scene).into());
    }
}
