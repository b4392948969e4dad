use eframe_whiteboard::history::MAX_HISTORY;
use eframe_whiteboard::{History, Surface};
use egui::{Color32, pos2};

fn blank_surface() -> Surface {
    Surface::new(64, 64).unwrap()
}

// Stamp a small disc so consecutive states differ.
fn mark(surface: &mut Surface, x: f32) {
    surface.fill_disc(pos2(x, 10.0), 3.0, Color32::RED);
}

#[test]
fn commit_appends_and_tracks_tail() {
    let mut surface = blank_surface();
    let mut history = History::new();
    history.commit(&surface);
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    mark(&mut surface, 10.0);
    history.commit(&surface);
    assert_eq!(history.len(), 2);
    assert_eq!(history.index(), 1);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn ring_buffer_evicts_oldest_beyond_cap() {
    let mut surface = blank_surface();
    let mut history = History::new();
    history.commit(&surface);

    let commits = 80;
    for i in 0..commits {
        mark(&mut surface, (i % 50) as f32);
        history.commit(&surface);
    }
    // 1 initial + 80 commits, capped.
    assert_eq!(history.len(), (commits + 1).min(MAX_HISTORY));
    assert_eq!(history.index(), history.len() - 1);
    assert!(!history.can_redo());
}

#[test]
fn undo_then_redo_is_pixel_exact() {
    let mut surface = blank_surface();
    let mut history = History::new();
    history.commit(&surface);

    mark(&mut surface, 10.0);
    history.commit(&surface);
    mark(&mut surface, 30.0);
    history.commit(&surface);

    let latest = surface.image().clone();
    assert!(history.undo(&mut surface));
    assert_ne!(surface.image().as_raw(), latest.as_raw());
    assert!(history.redo(&mut surface));
    assert_eq!(surface.image().as_raw(), latest.as_raw());
}

#[test]
fn commit_after_undo_discards_redo_branch() {
    let mut surface = blank_surface();
    let mut history = History::new();
    history.commit(&surface);

    mark(&mut surface, 10.0);
    history.commit(&surface);
    mark(&mut surface, 30.0);
    history.commit(&surface);
    assert_eq!(history.len(), 3);

    assert!(history.undo(&mut surface));
    assert!(history.can_redo());

    mark(&mut surface, 50.0);
    history.commit(&surface);
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 2);
    // The old tail is gone; redo cannot advance past the new entry.
    assert!(!history.can_redo());
    assert!(!history.redo(&mut surface));
}

#[test]
fn undo_at_first_entry_restores_blank_state() {
    let mut surface = blank_surface();
    let mut history = History::new();
    history.commit(&surface);

    // Draw without committing, then undo: the initial blank entry comes back.
    mark(&mut surface, 10.0);
    assert!(surface.pixel(10, 10).unwrap()[3] > 0);
    assert!(!history.undo(&mut surface));
    assert_eq!(surface.pixel(10, 10).unwrap()[3], 0);

    // A further undo stays at the blank state without error.
    assert!(!history.undo(&mut surface));
    assert_eq!(history.index(), 0);
}

#[test]
fn snapshots_are_independent_of_the_live_surface() {
    let mut surface = blank_surface();
    let mut history = History::new();
    history.commit(&surface);

    mark(&mut surface, 10.0);
    history.commit(&surface);

    // Scribble without committing; undo+redo must bring back the committed
    // state, not the scribble.
    mark(&mut surface, 50.0);
    assert!(history.undo(&mut surface));
    assert!(history.redo(&mut surface));
    assert!(surface.pixel(10, 10).unwrap()[3] > 0);
    assert_eq!(surface.pixel(50, 10).unwrap()[3], 0);
}
