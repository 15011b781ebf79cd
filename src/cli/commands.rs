//! Command dispatch

use std::io::{self, IsTerminal};
use std::path::Path;
use std::rc::Rc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{
    render_tree, run_composite_demo, run_facade_demo, ApplicationError, SampleTree,
};
use crate::cli::args::{Cli, Commands, ConfigCommands, DemoPart, TheaterCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{self, ConsoleSink};
use crate::config::{global_config_path, RenderStyle, Settings};
use crate::domain::{SharedSink, TracingSink};
use crate::facade::{GameOptions, HomeTheaterFacade, MovieOptions, MusicOptions};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    match &cli.command {
        None => {
            run_demo(&settings, DemoPart::All, None)?;
            pause(cli.no_pause)
        }
        Some(Commands::Demo { part, style }) => {
            run_demo(&settings, *part, *style)?;
            pause(cli.no_pause)
        }
        Some(Commands::Theater { command }) => run_theater(&settings, command),
        Some(Commands::Tree { style }) => print_tree(&settings, *style),
        Some(Commands::Config { command }) => run_config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn console() -> SharedSink {
    Rc::new(ConsoleSink)
}

#[instrument(skip(settings))]
fn run_demo(settings: &Settings, part: DemoPart, style: Option<RenderStyle>) -> CliResult<()> {
    let style = style.unwrap_or(settings.style);
    let mut out = io::stdout();

    if matches!(part, DemoPart::All | DemoPart::Facade) {
        run_facade_demo(console(), &mut out)?;
    }
    if matches!(part, DemoPart::All | DemoPart::Composite) {
        run_composite_demo(settings, style, console(), &mut out)?;
    }
    Ok(())
}

#[instrument(skip(settings))]
fn run_theater(settings: &Settings, command: &TheaterCommands) -> CliResult<()> {
    let mut theater = HomeTheaterFacade::with_sink(console());

    match command {
        TheaterCommands::Watch { channel, volume } => {
            let options = MovieOptions {
                channel: channel
                    .clone()
                    .unwrap_or_else(|| settings.movie.channel.clone()),
                volume: volume.unwrap_or(settings.movie.volume),
            };
            theater.watch_movie(&options);
        }
        TheaterCommands::Game { name, volume } => {
            if name.trim().is_empty() {
                return Err(CliError::InvalidArgs("game name must not be empty".into()));
            }
            let options = GameOptions {
                volume: volume.unwrap_or(settings.game.volume),
            };
            theater.play_game(name, &options);
        }
        TheaterCommands::Music { volume } => {
            let options = MusicOptions {
                volume: volume.unwrap_or(settings.music.volume),
            };
            theater.listen_music(&options);
        }
    }

    output::detail(&format!(
        "TV on: {}, channel {}, volume {}",
        theater.tv().is_on(),
        theater.tv().channel(),
        theater.audio().volume()
    ));
    Ok(())
}

fn print_tree(settings: &Settings, style: Option<RenderStyle>) -> CliResult<()> {
    let tree = SampleTree::build(TracingSink::shared());
    let style = style.unwrap_or(settings.style);
    output::info(&render_tree(&tree.root_node(), &settings.indent, style));
    Ok(())
}

fn run_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { path } => {
            let target = match path {
                Some(p) => p.clone(),
                None => global_config_path().ok_or_else(|| ApplicationError::Config {
                    message: "cannot determine global config directory".into(),
                })?,
            };
            Settings::write_template(&target)?;
            output::success(&format!("created {}", target.display()));
        }
        ConfigCommands::Path => {
            output::header("Config locations");
            match global_config_path() {
                Some(p) => output::detail(&format!("global: {}{}", p.display(), exists_marker(&p))),
                None => output::detail("global: <unavailable>"),
            }
            output::detail("env:    HOMETREE_* (e.g. HOMETREE_MUSIC__VOLUME=30)");
        }
    }
    Ok(())
}

fn exists_marker(path: &Path) -> &'static str {
    if path.exists() {
        ""
    } else {
        " (not found)"
    }
}

/// Wait for Enter, unless disabled or stdin is not interactive.
fn pause(disabled: bool) -> CliResult<()> {
    if disabled || !io::stdin().is_terminal() {
        return Ok(());
    }
    output::prompt("\nPress Enter to exit...");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| ApplicationError::io("read stdin", e))?;
    Ok(())
}
