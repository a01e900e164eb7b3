//! Display synchronizer tick behavior.

use tails_core::{DisplaySynchronizer, TickOutcome};

use crate::common::{FakeBoard, MemoryText};

const THREE_TOP: &[usize] = &[0, 1, 2];
const THREE_TOP_BLOCK: &str = "      \n1 Line: 68.88%\n2 Lines: 15.38%\n3 Lines: 0.35%\nShuffle Average: 58.46%   10.56%   0.21%\n";

const EIGHT_MARKS: &[usize] = &[0, 1, 2, 4, 5, 6, 7, 11];
const EIGHT_MARKS_BLOCK: &str = "      \n1 Line: 100.00%\n2 Lines: 12.50%\n3 Lines: 0.00%\n";

#[test]
fn first_tick_appends_annotation() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals: 3");
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals: 3{THREE_TOP_BLOCK}"));
    assert_eq!(text.writes, 1);
}

#[test]
fn steady_ticks_do_not_write() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals: 3");
    let mut sync = DisplaySynchronizer::default();

    sync.on_tick(&board, &mut text);
    let after_first = text.content.clone();
    for _ in 0..5 {
        assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Unchanged);
    }
    assert_eq!(text.writes, 1);
    assert_eq!(text.content, after_first);
}

#[test]
fn board_change_replaces_annotation() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals: 3");
    let mut sync = DisplaySynchronizer::default();
    sync.on_tick(&board, &mut text);

    board.set(EIGHT_MARKS);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals: 3{EIGHT_MARKS_BLOCK}"));
    assert_eq!(text.writes, 2);
}

#[test]
fn marker_removal_is_restored_verbatim() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals: 3");
    let mut sync = DisplaySynchronizer::default();
    sync.on_tick(&board, &mut text);

    // Host resets the node text behind our back.
    text.content = b"Seals: 3 (refreshed)".to_vec();
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Restored);
    assert_eq!(text.text(), format!("Seals: 3 (refreshed){THREE_TOP_BLOCK}"));

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Unchanged);
    assert_eq!(text.writes, 2);
}

#[test]
fn existing_annotation_is_replaced_not_duplicated() {
    let board = FakeBoard::new(THREE_TOP);
    let stale = format!("Seals: 3{EIGHT_MARKS_BLOCK}");
    let mut text = MemoryText::new(&stale);
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals: 3{THREE_TOP_BLOCK}"));
    assert_eq!(text.text().matches("1 Line:").count(), 1);
}

#[test]
fn current_annotation_is_not_rewritten() {
    let board = FakeBoard::new(THREE_TOP);
    let current = format!("Seals: 3{THREE_TOP_BLOCK}");
    let mut text = MemoryText::new(&current);
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Unchanged);
    assert_eq!(text.writes, 0);
    assert!(sync.remembered().is_some());
}

#[test]
fn loading_artifacts_are_discarded() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals");
    let mut sync = DisplaySynchronizer::default();
    sync.on_tick(&board, &mut text);

    board.set(&[]);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Discarded);
    assert!(sync.remembered().is_none());

    let all: Vec<usize> = (0..16).collect();
    board.set(&all);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Discarded);

    // With nothing remembered, a cleared buffer is left alone.
    text.content = b"Seals".to_vec();
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Unchanged);
    assert_eq!(text.text(), "Seals");
    assert_eq!(text.writes, 1);
}

#[test]
fn over_limit_boards_are_discarded() {
    let board = FakeBoard::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let mut text = MemoryText::new("Seals");
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Discarded);
    assert_eq!(text.writes, 0);
}

#[test]
fn not_ready_skips_and_forgets() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals");
    let mut sync = DisplaySynchronizer::default();
    sync.on_tick(&board, &mut text);
    assert!(sync.remembered().is_some());

    board.set_ready(false);
    text.content = b"Seals".to_vec();
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::NotReady);
    assert!(sync.remembered().is_none());
    assert_eq!(text.text(), "Seals");

    // Coming back re-derives the annotation from the board.
    board.set_ready(true);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals{THREE_TOP_BLOCK}"));
}

#[test]
fn intact_buffer_after_not_ready_is_not_rewritten() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals");
    let mut sync = DisplaySynchronizer::default();
    sync.on_tick(&board, &mut text);
    let written = text.content.clone();

    board.set_ready(false);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::NotReady);
    assert!(sync.remembered().is_none());
    assert!(sync.previous().is_none());

    board.set_ready(true);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Unchanged);
    assert_eq!(text.content, written);
    assert_eq!(text.writes, 1);
    assert!(sync.remembered().is_some());
}

#[test]
fn prefix_trailing_spaces_survive_board_change() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals ");
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals {THREE_TOP_BLOCK}"));

    board.set(&[0, 1, 2, 3]);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert!(text.text().starts_with("Seals       \n1 Line: "));
    assert_eq!(text.text().matches("1 Line:").count(), 1);

    board.set(THREE_TOP);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals {THREE_TOP_BLOCK}"));
}

#[test]
fn readiness_lost_mid_tick_abandons_write() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals");
    let mut sync = DisplaySynchronizer::default();

    // Ready for the entry check only.
    board.ready_for(1);
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Skipped);
    assert_eq!(text.writes, 0);
    assert!(sync.remembered().is_none());
}

#[test]
fn read_failure_retries_next_tick() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals");
    text.fail_reads = true;
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Skipped);
    assert_eq!(text.writes, 0);

    text.fail_reads = false;
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.text(), format!("Seals{THREE_TOP_BLOCK}"));
}

#[test]
fn write_failure_retries_next_tick() {
    let board = FakeBoard::new(THREE_TOP);
    let mut text = MemoryText::new("Seals");
    text.fail_writes = true;
    let mut sync = DisplaySynchronizer::default();

    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Skipped);
    text.fail_writes = false;
    assert_eq!(sync.on_tick(&board, &mut text), TickOutcome::Written);
    assert_eq!(text.writes, 1);
}

#[test]
fn multi_line_prefix_uses_short_form() {
    let board = FakeBoard::new(EIGHT_MARKS);
    let mut text = MemoryText::new("Wondrous\nSeals\nBonus\nNotes");
    let mut sync = DisplaySynchronizer::default();

    sync.on_tick(&board, &mut text);
    assert_eq!(
        text.text(),
        "Wondrous\nSeals\nBonus\nNotes      \nLine Chances: 100.00%   12.50%   0.00%\n"
    );
}
