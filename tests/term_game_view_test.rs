use number_sequence::core::GameState;
use number_sequence::term::{AnchorY, FrameBuffer, GameView, ViewOverlay, Viewport};
use number_sequence::types::{GameAction, GameMode};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn top_view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new();
    // 10 cells * 4 columns + border => 42x12
    let fb = top_view().render(&state, &ViewOverlay::default(), Viewport::new(42, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(41, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_idle_shows_instructions() {
    let state = GameState::new();
    let fb = top_view().render(&state, &ViewOverlay::default(), Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("Press N, then select 0-99"));
    assert!(text.contains("in ascending order"));
}

#[test]
fn term_view_draws_every_number_right_aligned() {
    let state = GameState::new().apply(GameAction::Start);
    let fb = top_view().render(&state, &ViewOverlay::default(), Viewport::new(42, 12));

    for (row, numbers) in state.board_layout().rows().enumerate() {
        let line = fb.row_text(1 + row as u16);
        let expected: String = numbers.iter().map(|n| format!("{n:>3} ")).collect();
        assert_eq!(&line[line.char_indices().nth(1).unwrap().0..][..40], expected);
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut state = GameState::new().apply(GameAction::Start);
    state = state.apply(GameAction::SelectNumber(0));
    state = state.apply(GameAction::Tick);

    let fb = top_view().render(&state, &ViewOverlay::default(), Viewport::new(70, 20));
    let text = screen_text(&fb);
    for label in [
        "MODE", "Time Limit", "LIMIT", "1:40", "TIME", "1s", "LEFT", "1:39", "LAST", "FOUND",
        "1/100",
    ] {
        assert!(text.contains(label), "missing {label}");
    }
}

#[test]
fn term_view_completion_mode_hides_limit() {
    let state = GameState::with_config(GameMode::Completion, 100).apply(GameAction::Start);
    let fb = top_view().render(&state, &ViewOverlay::default(), Viewport::new(70, 20));
    let text = screen_text(&fb);
    assert!(text.contains("FOUND"));
    assert!(!text.contains("LIMIT"));
    assert!(!text.contains("LEFT"));
}

#[test]
fn term_view_summary_overlay_follows_flag() {
    let state = GameState::new()
        .apply(GameAction::Start)
        .apply(GameAction::TimeUp);
    let view = top_view();
    let vp = Viewport::new(80, 24);

    let shown = view.render(
        &state,
        &ViewOverlay {
            show_summary: true,
            ..ViewOverlay::default()
        },
        vp,
    );
    let text = screen_text(&shown);
    assert!(text.contains("Time's Up!"));
    assert!(text.contains("R: play again"));

    let hidden = view.render(&state, &ViewOverlay::default(), vp);
    assert!(!screen_text(&hidden).contains("Time's Up!"));
}

#[test]
fn term_view_cursor_and_flash_change_cell_style() {
    let state = GameState::new().apply(GameAction::Start);
    let view = top_view();
    let vp = Viewport::new(42, 12);

    let plain = view.render(&state, &ViewOverlay::default(), vp);
    let cursor = view.render(
        &state,
        &ViewOverlay {
            cursor: Some(0),
            ..ViewOverlay::default()
        },
        vp,
    );
    let flash = view.render(
        &state,
        &ViewOverlay {
            flash: Some(0),
            ..ViewOverlay::default()
        },
        vp,
    );

    let a = plain.get(3, 1).unwrap().style;
    let b = cursor.get(3, 1).unwrap().style;
    let c = flash.get(3, 1).unwrap().style;
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
    // neighbouring cell untouched
    assert_eq!(plain.get(7, 1), cursor.get(7, 1));
}

#[test]
fn term_view_hit_test_matches_centered_geometry() {
    let view = GameView::default();
    let vp = Viewport::new(62, 22);
    // frame at (10, 5), 42x12
    assert_eq!(view.hit_test(vp, 11, 6), Some(0));
    assert_eq!(view.hit_test(vp, 14, 6), Some(0));
    assert_eq!(view.hit_test(vp, 15, 6), Some(1));
    assert_eq!(view.hit_test(vp, 50, 15), Some(99));
    assert_eq!(view.hit_test(vp, 10, 6), None);
    assert_eq!(view.hit_test(vp, 11, 5), None);
    assert_eq!(view.hit_test(vp, 51, 15), None);
    assert_eq!(view.hit_test(vp, 11, 16), None);
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let state = GameState::new().apply(GameAction::Start);
    let fb = GameView::default().render(&state, &ViewOverlay::default(), Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

#[test]
fn term_view_idle_describes_selected_mode() {
    let state = GameState::with_config(GameMode::Completion, 100);
    let fb = top_view().render(&state, &ViewOverlay::default(), Viewport::new(80, 24));
    assert!(screen_text(&fb).contains(GameMode::Completion.description()));
}
