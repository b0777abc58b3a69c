use tui_snake::core::{GameConfig, GameState};
use tui_snake::term::RenderThrottle;

fn game() -> GameState {
    GameState::new(GameConfig::default().with_seed(11)).unwrap()
}

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &game().snapshot()));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    let snap = game().snapshot();
    assert!(t.should_render(0, &snap));
    assert!(!t.should_render(10, &snap));
    assert!(!t.should_render(249, &snap));
    assert!(t.should_render(250, &snap));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    let mut game = game();
    assert!(t.should_render(0, &game.snapshot()));
    game.start(0);
    assert!(t.should_render(1, &game.snapshot()));
}

#[test]
fn render_throttle_skips_running_frames_between_ticks() {
    let mut t = RenderThrottle::new(250);
    let mut game = game();
    game.start(0);
    assert!(t.should_render(0, &game.snapshot()));
    // No heartbeat while the board is moving; only new ticks draw.
    assert!(!t.should_render(1_000, &game.snapshot()));
    game.poll(1_000);
    assert!(t.should_render(1_001, &game.snapshot()));
}

#[test]
fn render_throttle_invalidate_forces_a_frame() {
    let mut t = RenderThrottle::new(250);
    let snap = game().snapshot();
    assert!(t.should_render(0, &snap));
    t.invalidate();
    assert!(t.should_render(1, &snap));
}
