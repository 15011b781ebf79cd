//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use tracing::debug;

use crate::domain::{DeviceEvent, Event, EventSink, SceneEvent, TreeEvent};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print prompt without newline (cyan)
pub fn prompt(msg: &(impl std::fmt::Display + ?Sized)) {
    use std::io::Write;
    print!("{} ", msg.to_string().cyan());
    std::io::stdout().flush().ok();
}

/// Narrates events on stdout, colored by kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: Event) {
        debug!(?event, "narrate");
        let text = event.to_string();
        match &event {
            e if e.is_rejection() => println!("{}", text.yellow()),
            Event::Scene(SceneEvent::Begin(_)) => println!("\n{}", text.cyan().bold()),
            Event::Scene(SceneEvent::Ready(_)) => println!("{}\n", text.cyan().bold()),
            Event::Tree(TreeEvent::Added { .. }) | Event::Device(DeviceEvent::PoweredOn(_)) => {
                println!("{}", text.green())
            }
            _ => println!("{text}"),
        }
    }
}
