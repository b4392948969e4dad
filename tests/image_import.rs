use eframe_whiteboard::{DecodeError, FontBook, ToolSettings, Whiteboard};
use image::{Rgba, RgbaImage};

fn board(width: u32, height: u32) -> Whiteboard {
    Whiteboard::new(width, height, ToolSettings::default(), FontBook::empty()).unwrap()
}

fn red_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbaImage::new(width, height);
    for px in img.pixels_mut() {
        *px = Rgba([255, 0, 0, 255]);
    }
    let mut bytes = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn wait_import(board: &mut Whiteboard) -> Result<(), DecodeError> {
    for _ in 0..400 {
        if let Some(result) = board.poll_import() {
            return result;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    panic!("decode did not complete in time");
}

fn red_at(board: &Whiteboard, x: u32, y: u32) -> bool {
    board
        .surface()
        .pixel(x, y)
        .is_some_and(|p| p[0] > 200 && p[3] > 200)
}

#[test]
fn import_scales_to_fit_and_centers() {
    let mut board = board(400, 400);
    board.begin_image_import(red_png(100, 50));
    assert!(board.import_in_flight());
    wait_import(&mut board).unwrap();
    assert!(!board.import_in_flight());

    // Aspect-preserving scale is min(400/100, 400/50) = 4, so the image
    // lands as 400x200 centered vertically at rows 100..300.
    assert!(red_at(&board, 200, 200));
    assert!(red_at(&board, 10, 110));
    assert!(red_at(&board, 390, 290));
    assert!(!red_at(&board, 200, 50));
    assert!(!red_at(&board, 200, 350));

    // The import is undoable as a single checkpoint.
    assert!(board.can_undo());
    board.undo();
    assert!(!red_at(&board, 200, 200));
}

#[test]
fn malformed_bytes_report_an_error_and_leave_pixels_alone() {
    let mut board = board(200, 200);
    let before = board.surface().image().clone();

    board.begin_image_import(b"definitely not an image".to_vec());
    let result = wait_import(&mut board);
    assert!(matches!(result, Err(DecodeError::Malformed(_))));
    assert_eq!(board.surface().image().as_raw(), before.as_raw());
    assert!(!board.can_undo());
}

#[test]
fn decode_completing_after_a_resize_fits_the_current_dimensions() {
    let mut board = board(400, 400);
    board.begin_image_import(red_png(100, 50));
    // The surface changes size while the decode is in flight.
    board.resize(350, 260).unwrap();
    wait_import(&mut board).unwrap();

    assert_eq!((board.width(), board.height()), (350, 260));
    // Fit math uses the fresh dimensions: scale min(350/100, 260/50) = 3.5,
    // giving a 350x175 image centered at rows ~43..218.
    assert!(red_at(&board, 175, 130));
    assert!(red_at(&board, 10, 60));
    assert!(!red_at(&board, 175, 20));
    assert!(!red_at(&board, 175, 240));
}

#[test]
fn only_one_decode_runs_at_a_time() {
    let mut board = board(300, 300);
    board.begin_image_import(red_png(40, 40));
    // A second request while one is in flight is ignored.
    board.begin_image_import(red_png(10, 10));
    wait_import(&mut board).unwrap();
    assert!(board.poll_import().is_none());
    assert!(!board.import_in_flight());
}
