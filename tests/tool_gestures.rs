use eframe_whiteboard::{
    FontBook, PointerPhase, PointerSource, RawPointerEvent, Surface, ToolKind, ToolSettings,
    Whiteboard,
};
use egui::{Color32, Pos2, pos2};

fn board(width: u32, height: u32) -> Whiteboard {
    Whiteboard::new(width, height, ToolSettings::default(), FontBook::empty()).unwrap()
}

fn mouse(phase: PointerPhase, pos: Pos2) -> RawPointerEvent {
    RawPointerEvent {
        source: PointerSource::Mouse,
        phase,
        device_pos: pos,
    }
}

fn begin(board: &mut Whiteboard, x: f32, y: f32) {
    board.handle_pointer(mouse(PointerPhase::Begin, pos2(x, y)));
}

fn drag(board: &mut Whiteboard, x: f32, y: f32) {
    board.handle_pointer(mouse(PointerPhase::Move, pos2(x, y)));
}

fn end(board: &mut Whiteboard) {
    board.handle_pointer(mouse(PointerPhase::End, pos2(0.0, 0.0)));
}

fn inked(surface: &Surface, x: u32, y: u32) -> bool {
    surface.pixel(x, y).is_some_and(|p| p[3] > 0)
}

#[test]
fn pen_gesture_paints_along_the_path_and_commits() {
    let mut board = board(400, 300);
    board.set_color(Color32::RED);
    board.set_brush_size(4.0);
    assert!(!board.can_undo());

    begin(&mut board, 10.0, 10.0);
    drag(&mut board, 50.0, 50.0);
    drag(&mut board, 90.0, 50.0);
    end(&mut board);

    assert!(inked(board.surface(), 30, 30));
    assert!(inked(board.surface(), 70, 50));
    assert!(board.can_undo());

    board.undo();
    assert!(!inked(board.surface(), 30, 30));
    board.redo();
    assert!(inked(board.surface(), 30, 30));
}

#[test]
fn color_change_mid_stroke_applies_to_the_next_segment() {
    let mut board = board(400, 300);
    board.set_color(Color32::RED);
    board.set_brush_size(4.0);

    begin(&mut board, 10.0, 10.0);
    drag(&mut board, 60.0, 10.0);
    board.set_color(Color32::BLUE);
    drag(&mut board, 110.0, 10.0);
    end(&mut board);

    let early = board.surface().pixel(30, 10).unwrap();
    let late = board.surface().pixel(90, 10).unwrap();
    assert_eq!((early[0], early[2]), (255, 0));
    assert_eq!((late[0], late[2]), (0, 255));
}

#[test]
fn eraser_stamps_remove_ink() {
    let mut board = board(400, 300);
    board.set_brush_size(20.0);
    begin(&mut board, 10.0, 50.0);
    drag(&mut board, 200.0, 50.0);
    end(&mut board);
    assert!(inked(board.surface(), 100, 50));

    board.set_tool(ToolKind::Eraser);
    board.set_brush_size(15.0);
    begin(&mut board, 100.0, 50.0);
    drag(&mut board, 100.0, 50.0);
    end(&mut board);

    assert!(!inked(board.surface(), 100, 50));
    // Two gestures means two checkpoints past the initial blank state.
    board.undo();
    assert!(inked(board.surface(), 100, 50));
}

#[test]
fn shape_preview_leaves_no_residue_from_earlier_frames() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Rectangle);
    board.set_brush_size(4.0);

    begin(&mut board, 10.0, 10.0);
    // A large intermediate preview, then a smaller final shape.
    drag(&mut board, 200.0, 150.0);
    drag(&mut board, 50.0, 40.0);
    end(&mut board);

    // The big preview's right edge is gone.
    assert!(!inked(board.surface(), 200, 100));
    // The final rectangle is there.
    assert!(inked(board.surface(), 50, 25));
    assert!(inked(board.surface(), 10, 10));
    assert!(inked(board.surface(), 50, 40));
}

#[test]
fn circle_tool_uses_anchor_as_center() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Circle);
    board.set_brush_size(4.0);

    begin(&mut board, 50.0, 50.0);
    drag(&mut board, 80.0, 50.0);
    end(&mut board);

    assert!(inked(board.surface(), 20, 50));
    assert!(inked(board.surface(), 50, 80));
    assert!(!inked(board.surface(), 50, 50));
}

#[test]
fn arrow_tool_commits_shaft_and_head() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Arrow);
    board.set_brush_size(2.0);

    begin(&mut board, 20.0, 50.0);
    drag(&mut board, 80.0, 50.0);
    end(&mut board);

    assert!(inked(board.surface(), 50, 50));
    assert!(board.can_undo());
}

#[test]
fn second_begin_during_a_gesture_is_ignored() {
    let mut board = board(400, 300);
    board.set_brush_size(4.0);

    begin(&mut board, 10.0, 10.0);
    // A stray second begin must not restart the stroke elsewhere.
    begin(&mut board, 200.0, 200.0);
    drag(&mut board, 40.0, 10.0);
    end(&mut board);

    assert!(inked(board.surface(), 25, 10));
    assert!(!inked(board.surface(), 200, 200));
}

#[test]
fn clear_records_a_checkpoint() {
    let mut board = board(400, 300);
    begin(&mut board, 10.0, 10.0);
    drag(&mut board, 50.0, 10.0);
    end(&mut board);
    assert!(inked(board.surface(), 30, 10));

    board.clear();
    assert!(!inked(board.surface(), 30, 10));
    // Undoing the clear brings the stroke back.
    board.undo();
    assert!(inked(board.surface(), 30, 10));
}

#[test]
fn undo_past_the_first_entry_blanks_and_stays_blank() {
    let mut board = board(400, 300);
    begin(&mut board, 10.0, 10.0);
    drag(&mut board, 50.0, 10.0);
    end(&mut board);

    board.undo();
    assert!(!inked(board.surface(), 30, 10));
    // Undo at the floor is a no-op, not an error.
    board.undo();
    assert!(!inked(board.surface(), 30, 10));
    board.redo();
    assert!(inked(board.surface(), 30, 10));
}

#[test]
fn text_click_opens_a_buffer_without_marking_the_surface() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Text);

    begin(&mut board, 40.0, 60.0);
    end(&mut board);

    let buffer = board.text_buffer().expect("text buffer should be open");
    assert_eq!(buffer.anchor, pos2(40.0, 60.0));
    assert!(buffer.text.is_empty());
    // Opening the editor is not an edit.
    assert!(!board.can_undo());
    assert!(board.surface().image().pixels().all(|p| p[3] == 0));
}

#[test]
fn text_commit_composites_and_checkpoints() {
    let mut board = Whiteboard::new(
        400,
        300,
        ToolSettings::default(),
        FontBook::from_egui_defaults(),
    )
    .unwrap();
    board.set_tool(ToolKind::Text);
    board.set_font_size(32.0);

    begin(&mut board, 20.0, 20.0);
    end(&mut board);
    board
        .text_buffer_mut()
        .expect("text buffer should be open")
        .text = "Hi".to_owned();
    board.commit_text();

    assert!(board.text_buffer().is_none());
    assert!(board.can_undo());
    // Some glyph coverage landed near the anchor.
    let hit = (20..120).any(|x| (20..80).any(|y| inked(board.surface(), x, y)));
    assert!(hit, "expected glyph pixels near the anchor");
}

#[test]
fn text_cancel_and_blank_commit_discard_the_buffer() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Text);

    begin(&mut board, 20.0, 20.0);
    end(&mut board);
    board.text_buffer_mut().unwrap().text = "discard me".to_owned();
    board.cancel_text();
    assert!(board.text_buffer().is_none());
    assert!(!board.can_undo());

    begin(&mut board, 20.0, 20.0);
    end(&mut board);
    board.text_buffer_mut().unwrap().text = "   ".to_owned();
    board.commit_text();
    assert!(!board.can_undo());
    assert!(board.surface().image().pixels().all(|p| p[3] == 0));
}

#[test]
fn opening_a_second_text_entry_cancels_the_first() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Text);

    begin(&mut board, 20.0, 20.0);
    end(&mut board);
    board.text_buffer_mut().unwrap().text = "first".to_owned();

    begin(&mut board, 100.0, 120.0);
    end(&mut board);
    let buffer = board.text_buffer().unwrap();
    assert_eq!(buffer.anchor, pos2(100.0, 120.0));
    assert!(buffer.text.is_empty());
}

#[test]
fn switching_tools_drops_a_pending_text_entry() {
    let mut board = board(400, 300);
    board.set_tool(ToolKind::Text);
    begin(&mut board, 20.0, 20.0);
    end(&mut board);
    assert!(board.text_buffer().is_some());

    board.set_tool(ToolKind::Pen);
    assert!(board.text_buffer().is_none());
}

#[test]
fn resize_preserves_committed_strokes() {
    let mut board = board(400, 300);
    board.set_brush_size(8.0);
    begin(&mut board, 190.0, 140.0);
    drag(&mut board, 210.0, 160.0);
    end(&mut board);

    board.resize(800, 600).unwrap();
    assert_eq!((board.width(), board.height()), (800, 600));
    assert!(inked(board.surface(), 400, 300));
}
