//! The fixed demonstration scenario for both patterns.
//!
//! Narration goes to the sink; rendered trees and totals go to `out`.

use std::io::Write;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::{RenderStyle, Settings};
use crate::domain::{AddOutcome, Directory, FileNode, Node, SharedSink, TreeNodeConvert};
use crate::facade::{GameOptions, HomeTheaterFacade, MovieOptions, MusicOptions};

pub const DEMO_CHANNEL: &str = "5";
pub const DEMO_MOVIE_VOLUME: i32 = 45;
pub const DEMO_GAME: &str = "Super Fun Game";
pub const DEMO_GAME_VOLUME: i32 = 20;
pub const DEMO_SET_VOLUME: i32 = 10;
pub const DEMO_MUSIC_VOLUME: i32 = 18;

/// The sample file tree with handles to every node.
#[derive(Debug)]
pub struct SampleTree {
    pub root: Rc<Directory>,
    pub photos: Rc<Directory>,
    pub readme: Rc<FileNode>,
    pub photo: Rc<FileNode>,
    pub vacation1: Rc<FileNode>,
    pub vacation2: Rc<FileNode>,
}

impl SampleTree {
    /// Create the nodes without linking them.
    pub fn new(sink: SharedSink) -> Self {
        Self {
            root: Directory::with_sink("root", sink.clone()),
            photos: Directory::with_sink("photos", sink),
            readme: FileNode::new("readme.txt", 1_200),
            photo: FileNode::new("photo.jpg", 2_500_000),
            vacation1: FileNode::new("vacation1.jpg", 1_400_000),
            vacation2: FileNode::new("vacation2.jpg", 1_600_000),
        }
    }

    /// root <- readme.txt, photo.jpg, photos; photos <- vacation1.jpg, vacation2.jpg
    pub fn populate(&self) {
        self.root.add(&self.readme);
        self.root.add(&self.photo);
        self.root.add(&self.photos);
        self.photos.add(&self.vacation1);
        self.photos.add(&self.vacation2);
    }

    pub fn build(sink: SharedSink) -> Self {
        let tree = Self::new(sink);
        tree.populate();
        tree
    }

    pub fn root_node(&self) -> Node {
        Node::from(&self.root)
    }
}

/// Render a tree in the requested style.
pub fn render_tree(node: &Node, indent_marker: &str, style: RenderStyle) -> String {
    match style {
        RenderStyle::Plain => node.render_with("", indent_marker),
        RenderStyle::Tree => node.to_tree_string().to_string().trim_end().to_string(),
    }
}

/// What the composite demo observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeReport {
    pub duplicate: AddOutcome,
    pub total_before: u64,
    pub total_after: u64,
    pub photos_len_after: usize,
}

#[instrument(level = "debug", skip_all)]
pub fn run_composite_demo<W: Write>(
    settings: &Settings,
    style: RenderStyle,
    sink: SharedSink,
    out: &mut W,
) -> ApplicationResult<CompositeReport> {
    writeln!(out, "\n=== Composite demo ===").context("write demo header")?;
    let tree = SampleTree::build(sink);

    // vacation1.jpg is already in photos
    let duplicate = tree.photos.add(&tree.vacation1);
    debug!(?duplicate, "re-added vacation1.jpg");

    let root = tree.root_node();
    writeln!(out, "{}", render_tree(&root, &settings.indent, style)).context("write tree")?;
    let total_before = tree.root.size();
    writeln!(out, "Total size of root: {total_before} bytes").context("write total")?;

    tree.photos.remove(&tree.vacation2);
    writeln!(out, "{}", render_tree(&root, &settings.indent, style)).context("write tree")?;
    let total_after = tree.root.size();
    writeln!(out, "Total size of root after removal: {total_after} bytes")
        .context("write total")?;

    Ok(CompositeReport {
        duplicate,
        total_before,
        total_after,
        photos_len_after: tree.photos.len(),
    })
}

/// Watch a movie, end it, play a game, turn it down, listen to music.
#[instrument(level = "debug", skip_all)]
pub fn run_facade_demo<W: Write>(
    sink: SharedSink,
    out: &mut W,
) -> ApplicationResult<HomeTheaterFacade> {
    writeln!(out, "=== Facade demo ===").context("write demo header")?;
    let mut theater = HomeTheaterFacade::with_sink(sink);

    theater.watch_movie(&MovieOptions {
        channel: DEMO_CHANNEL.to_string(),
        volume: DEMO_MOVIE_VOLUME,
    });
    theater.end_movie();

    theater.play_game(
        DEMO_GAME,
        &GameOptions {
            volume: DEMO_GAME_VOLUME,
        },
    );
    theater.set_volume(DEMO_SET_VOLUME);

    theater.listen_music(&MusicOptions {
        volume: DEMO_MUSIC_VOLUME,
    });

    Ok(theater)
}
