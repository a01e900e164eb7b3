//! Strip-and-recompose stability.

use std::collections::HashMap;

use tails_core::{AnnotationComposer, DisplaySynchronizer, MarkerScanner, TickOutcome};
use tails_solver::{reference_sample, solve};
use tails_types::{AnnotationSettings, BoardState, Category, SegmentStyle};

use crate::common::{FakeBoard, MemoryText};

fn compose_onto(
    composer: &AnnotationComposer,
    scanner: &MarkerScanner,
    board: BoardState,
    content: &[u8],
) -> Vec<u8> {
    let prefix = scanner.strip(content);
    let annotation = composer.compose(
        &solve(&board),
        reference_sample(board.marked_count()).as_ref(),
        scanner.line_breaks(prefix),
    );
    annotation.patch(prefix)
}

#[test]
fn recomposing_stripped_output_is_identical() {
    let settings = AnnotationSettings::default();
    let composer = AnnotationComposer::new(settings.clone());
    let scanner = MarkerScanner::new(&settings);

    for (prefix, marks) in [
        ("", vec![5]),
        ("Seals", vec![0, 5, 10]),
        ("Seals ", vec![0, 1, 2]),
        ("Seals  \t   ", vec![0, 1, 2, 3]),
        ("a\nb\nc\nd", vec![3, 12]),
        ("one\ntwo", vec![0, 1, 2, 3, 4, 8, 12, 5]),
    ] {
        let board = BoardState::from_indices(marks);
        let once = compose_onto(&composer, &scanner, board, prefix.as_bytes());
        let twice = compose_onto(&composer, &scanner, board, &once);
        assert_eq!(once, twice, "prefix={prefix:?} board={board}");
        assert!(once.starts_with(prefix.as_bytes()));
    }
}

#[test]
fn opaque_prefix_bytes_survive() {
    let mut styles = HashMap::new();
    styles.insert(Category::Favorable, SegmentStyle::new(b"\x02\x13".to_vec(), b"\x03".to_vec()));
    let settings = AnnotationSettings::new("\x1f\x1f", "\x02\x10\x01\x03", 2, true, styles).unwrap();
    let board = FakeBoard::new(&[0, 5, 10]);
    let mut text = MemoryText {
        content: b"\xffhead\x02\x10\x01\x03tail\x00".to_vec(),
        ..MemoryText::default()
    };
    let original = text.content.clone();
    let mut sync = DisplaySynchronizer::new(settings);

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert!(text.content.starts_with(&original));
    let annotation = &text.content[original.len()..];
    assert!(annotation.starts_with(b"\x1f\x1f\n1 Line: \x02\x1373.83%\x03\n"));

    for _ in 0..3 {
        assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Unchanged);
    }
    assert_eq!(text.writes, 1);
}

#[test]
fn annotation_region_is_stable_across_ticks() {
    let board = FakeBoard::new(&[0, 1, 2]);
    let mut text = MemoryText::new("Seals");
    let mut sync = DisplaySynchronizer::default();

    sync.on_tick(&board, &mut text);
    let first = text.content.clone();
    for _ in 0..10 {
        sync.on_tick(&board, &mut text);
        assert_eq!(text.content, first);
    }

    let remembered = sync.remembered().unwrap().as_bytes().to_vec();
    assert!(first.ends_with(&remembered));
}
