//! Integration tests for the pixel-to-terminal path: views paint logical
//! frames, `fit_into` packs them into half-block cells, and the encoders turn
//! cells into terminal bytes.

use tui_arcade::core::{BlocksGame, MergeGame, PushboxGame};
use tui_arcade::term::{
    encode_diff_into, encode_full_into, fit_into, BlocksView, FrameBuffer, MergeView, PixelBuffer,
    PushboxView, Rgb, View,
};
use tui_arcade::types::Direction;

#[test]
fn test_frame_that_fits_maps_two_pixels_per_cell() {
    let game = MergeGame::new(12345);
    let mut fb = PixelBuffer::new(1, 1);
    MergeView.render_into(&game, &mut fb);
    let (w, h) = MergeView.size();
    assert_eq!((fb.width(), fb.height()), (w, h));

    let mut cells = FrameBuffer::new(1, 1);
    fit_into(&fb, w, h / 2, &mut cells);

    for cy in 0..h / 2 {
        for x in 0..w {
            let cell = cells.get(x, cy).unwrap();
            let top = fb.get(x as i32, cy as i32 * 2).unwrap();
            let bottom = fb.get(x as i32, cy as i32 * 2 + 1).unwrap();
            assert_eq!(cell.style.fg, Rgb::from_pixel(top), "cell ({x}, {cy})");
            assert_eq!(cell.style.bg, Rgb::from_pixel(bottom), "cell ({x}, {cy})");
        }
    }
}

#[test]
fn test_large_frame_is_downsampled_into_small_terminal() {
    let game = BlocksGame::new(3);
    let mut fb = PixelBuffer::new(1, 1);
    BlocksView::default().render_into(&game, &mut fb);

    let mut cells = FrameBuffer::new(1, 1);
    fit_into(&fb, 40, 11, &mut cells);
    assert_eq!((cells.width(), cells.height()), (40, 11));

    let black = Rgb::from_pixel(0);
    let painted = cells
        .cells()
        .iter()
        .filter(|c| c.style.fg != black || c.style.bg != black)
        .count();
    assert!(painted > 0);
    // 80x88 scaled to fit 22 pixel rows is 20 wide; the rest stays letterboxed
    assert!(painted <= 20 * 11);
}

#[test]
fn test_diff_is_smaller_than_full_redraw_after_one_move() {
    let mut game = PushboxGame::new();
    let mut fb = PixelBuffer::new(1, 1);
    PushboxView.render_into(&game, &mut fb);
    let (w, h) = PushboxView.size();
    let mut before = FrameBuffer::new(1, 1);
    fit_into(&fb, w, h / 2, &mut before);

    game.step(Direction::Left);
    PushboxView.render_into(&game, &mut fb);
    let mut after = FrameBuffer::new(1, 1);
    fit_into(&fb, w, h / 2, &mut after);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);

    let mut unchanged = Vec::new();
    encode_diff_into(&after, &after, &mut unchanged).unwrap();
    assert!(unchanged.len() < diff.len());
}
