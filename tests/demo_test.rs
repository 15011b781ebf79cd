//! Tests for the demonstration scenario

use std::rc::Rc;

use hometree::application::{render_tree, run_composite_demo, run_facade_demo, SampleTree};
use hometree::config::{RenderStyle, Settings};
use hometree::domain::{AddOutcome, Event, RecordingSink, TreeEvent};
use hometree::util::testing;

#[test]
fn given_sample_tree_when_built_then_root_holds_three_children() {
    let tree = SampleTree::build(RecordingSink::new());

    assert_eq!(tree.root.len(), 3);
    assert_eq!(tree.photos.len(), 2);
    assert_eq!(tree.root.size(), 5_501_200);
}

#[test]
fn given_composite_demo_when_run_then_reports_totals_and_rejection() {
    testing::init_test_setup();
    let sink = RecordingSink::new();
    let mut out = Vec::new();

    let report =
        run_composite_demo(&Settings::default(), RenderStyle::Plain, sink.clone(), &mut out)
            .expect("demo runs");

    assert_eq!(report.duplicate, AddOutcome::Duplicate);
    assert_eq!(report.total_before, 5_501_200);
    assert_eq!(report.total_after, 3_901_200);
    assert_eq!(report.photos_len_after, 1);

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Total size of root: 5501200 bytes"));
    assert!(text.contains("Total size of root after removal: 3901200 bytes"));
    assert_eq!(text.matches("+ Directory: root").count(), 2);
    assert!(text.contains("      - File: vacation2.jpg (1600000 bytes)"));

    let tree_events: Vec<TreeEvent> = sink
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::Tree(t) => Some(t),
            _ => None,
        })
        .collect();
    // five adds, one duplicate, one removal
    assert_eq!(tree_events.len(), 7);
    assert!(matches!(
        tree_events[5],
        TreeEvent::DuplicateRejected { .. }
    ));
    assert_eq!(
        tree_events[6],
        TreeEvent::Removed {
            directory: "photos".into(),
            child: "vacation2.jpg".into(),
        }
    );
}

#[test]
fn given_facade_demo_when_run_then_ends_in_music_mode() {
    let sink = RecordingSink::new();
    let mut out = Vec::new();

    let theater = run_facade_demo(sink.clone(), &mut out).expect("demo runs");

    assert!(theater.tv().is_on());
    assert!(theater.audio().is_on());
    assert!(theater.console().is_on());
    assert!(!theater.dvd().is_playing());
    assert_eq!(theater.tv().channel(), "5");
    assert_eq!(theater.audio().volume(), 18);
    assert!(!sink.is_empty());
    assert!(String::from_utf8(out).expect("utf8").contains("Facade demo"));
}

#[test]
fn given_tree_style_when_rendering_sample_then_uses_box_drawing() {
    let tree = SampleTree::build(Rc::new(RecordingSink::default()));

    let rendered = render_tree(&tree.root_node(), "   ", RenderStyle::Tree);

    assert!(rendered.starts_with("root/ (5501200 bytes)"));
    assert!(rendered.contains("└── "));
    assert_eq!(rendered.lines().count(), 6);
}

#[test]
fn given_custom_indent_when_rendering_plain_then_uses_it() {
    let tree = SampleTree::build(RecordingSink::new());

    let rendered = render_tree(&tree.root_node(), "\t", RenderStyle::Plain);

    assert!(rendered.contains("\n\t\t- File: vacation1.jpg (1400000 bytes)"));
}
