use tui_snake::core::{GameConfig, GameState, TickScheduler};
use tui_snake::types::{GameAction, GameStatus};

fn running_game() -> GameState {
    let mut game = GameState::new(GameConfig::default().with_seed(3)).unwrap();
    assert!(game.start(0));
    game
}

#[test]
fn pause_cancels_and_resume_restarts_with_last_interval() {
    let mut game = running_game();
    let first = game.scheduler().timer_id();
    assert!(first.is_some());

    assert!(game.apply_action(GameAction::Pause, 50));
    assert_eq!(game.status(), GameStatus::Paused);
    assert_eq!(game.scheduler().live_handles(), 0);
    assert!(game.poll(10_000).is_none());

    assert!(game.apply_action(GameAction::Pause, 10_000));
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.scheduler().live_handles(), 1);
    assert_ne!(game.scheduler().timer_id(), first);
    assert_eq!(game.scheduler().interval_ms(), game.interval_ms());
    assert_eq!(game.time_until_next_tick(10_000), Some(200));
}

#[test]
fn enter_resumes_a_paused_run() {
    let mut game = running_game();
    game.pause();
    assert!(game.apply_action(GameAction::Start, 500));
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn reset_cancels_the_timer() {
    let mut game = running_game();
    game.poll(200);
    let episode = game.episode_id();

    assert!(game.apply_action(GameAction::Reset, 300));
    assert_eq!(game.status(), GameStatus::Idle);
    assert_eq!(game.scheduler().live_handles(), 0);
    assert_eq!(game.time_until_next_tick(300), None);
    assert_eq!(game.episode_id(), episode + 1);
    assert_eq!(game.ticks(), 0);
}

#[test]
fn one_tick_per_poll_even_when_late() {
    let mut game = running_game();
    assert!(game.poll(199).is_none());
    assert!(game.poll(1_000).is_some());
    // Five intervals late, but only one tick ran and the next is a full
    // interval away.
    assert!(game.poll(1_000).is_none());
    assert_eq!(game.ticks(), 1);
    assert_eq!(
        game.time_until_next_tick(1_000),
        Some(game.interval_ms() as u64)
    );
}

#[test]
fn restarting_never_leaves_two_handles() {
    let mut s = TickScheduler::new(200);
    s.start(0, 200);
    s.start(10, 150);
    s.restart_with_interval(100);
    s.restart_with_interval(90);
    assert_eq!(s.live_handles(), 1);
    assert_eq!(s.handles_created(), 4);
    assert_eq!(s.interval_ms(), 90);
}
