use tui_snake::core::{GameConfig, GameSnapshot, GameState, Snake};
use tui_snake::term::{FrameBuffer, GameView, TimeOfDay, Viewport};
use tui_snake::types::{Cell, Direction, GameStatus};

fn layout_game(snake: &[(i16, i16)], food: (i16, i16), direction: Direction) -> GameState {
    let snake = Snake::from_cells(snake.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
    GameState::from_layout(
        GameConfig::default(),
        snake,
        Cell::new(food.0, food.1),
        direction,
    )
    .unwrap()
}

/// Heading that moves toward the food, avoiding walls, the body and dead ends.
fn toward_food(snap: &GameSnapshot) -> Direction {
    let free = |c: Cell| {
        c.x >= 0
            && c.y >= 0
            && c.x < snap.grid_width as i16
            && c.y < snap.grid_height as i16
            && !snap.snake.contains(&c)
    };
    let head = snap.head().unwrap();
    let food = snap.food.unwrap();
    Direction::ALL
        .into_iter()
        .filter(|&d| !d.is_opposite(snap.direction) && free(head.step(d)))
        .min_by_key(|&d| {
            let next = head.step(d);
            let exits = Direction::ALL
                .into_iter()
                .filter(|&e| free(next.step(e)))
                .count();
            let distance = (next.x - food.x).abs() + (next.y - food.y).abs();
            (exits == 0, distance)
        })
        .unwrap_or(snap.direction)
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    let view = GameView::default();

    // 20 cells * 2 columns + border = 42 wide, 20 rows + border = 22 tall.
    let fb = view.render(&snap, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_snake_two_columns_wide_and_food() {
    let mut game = layout_game(&[(3, 19), (2, 19), (1, 19)], (0, 0), Direction::Right);
    game.start(0);
    let snap = game.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(42, 22));

    // Inside the border, grid cell (x, y) starts at column 1 + 2x, row 1 + y.
    let row = 1 + 19;
    assert_eq!(fb.get(7, row).unwrap().ch, '▶');
    assert_eq!(fb.get(8, row).unwrap().ch, '▶');
    assert_eq!(fb.get(5, row).unwrap().ch, '█');
    assert_eq!(fb.get(4, row).unwrap().ch, '█');
    assert_eq!(fb.get(3, row).unwrap().ch, '█');
    assert_eq!(fb.get(1, 1).unwrap().ch, '●');
    assert_eq!(fb.get(10, 5).unwrap().ch, '·');
}

#[test]
fn term_view_head_follows_committed_direction() {
    let mut game = layout_game(&[(5, 5), (5, 6)], (0, 0), Direction::Up);
    game.start(0);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(42, 22));
    assert_eq!(fb.get(11, 6).unwrap().ch, '▲');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap: GameSnapshot = GameState::new(GameConfig::default()).unwrap().snapshot();
    snap.status = GameStatus::Running;
    snap.score = 1234;
    snap.best_score = 2000;
    snap.level = 3;
    snap.interval_ms = 150;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);

    for label in ["SCORE", "BEST", "LEVEL", "LENGTH", "SPEED"] {
        assert!(all.contains(label), "missing {label}");
    }
    assert!(all.contains("1234"));
    assert!(all.contains("2000"));
    assert!(all.contains("150ms"));
    assert!(all.contains("[▲]"));
}

#[test]
fn term_view_overlays_follow_status() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let mut game = layout_game(&[(0, 5), (1, 5)], (9, 9), Direction::Right);
    assert!(screen_text(&view.render(&game.snapshot(), viewport)).contains("READY"));

    game.start(0);
    game.pause();
    assert!(screen_text(&view.render(&game.snapshot(), viewport)).contains("PAUSED"));

    game.resume(0);
    game.request_direction(Direction::Up);
    let mut now = 0;
    while game.status() == GameStatus::Running {
        now += 1_000;
        game.poll(now);
    }
    let text = screen_text(&view.render(&game.snapshot(), viewport));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("hit the wall"));
    assert!(!text.contains("NEW BEST"));
}

#[test]
fn term_view_announces_new_best() {
    let mut game = layout_game(&[(18, 3)], (19, 3), Direction::Right);
    game.start(0);
    game.poll(200);
    game.poll(1_000);
    assert_eq!(game.status(), GameStatus::Over);

    let text = screen_text(&GameView::default().render(&game.snapshot(), Viewport::new(80, 24)));
    assert!(text.contains("NEW BEST"));
}

#[test]
fn term_view_announces_level_up_after_fifth_meal() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut game = GameState::new(GameConfig::default().with_seed(42)).unwrap();
    game.start(0);

    let mut now = 0;
    while game.level() == 1 {
        assert_eq!(game.status(), GameStatus::Running, "snake died after {} meals", game.score());
        game.request_direction(toward_food(&game.snapshot()));
        now += game.time_until_next_tick(now).unwrap();
        game.poll(now);
    }
    assert_eq!(game.score(), 5);

    let text = screen_text(&view.render(&game.snapshot(), viewport));
    assert!(text.contains("LEVEL 2"), "{text}");
    assert!(text.contains("next in 6 food"));

    // The banner goes away on its own while the run continues.
    game.request_direction(toward_food(&game.snapshot()));
    game.poll(now + 1_500);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.level_banner(), None);
    let text = screen_text(&view.render(&game.snapshot(), viewport));
    assert!(!text.contains("LEVEL 2"));
}

#[test]
fn term_view_palette_changes_border_color() {
    let snap = GameState::new(GameConfig::default()).unwrap().snapshot();
    let viewport = Viewport::new(42, 22);
    let morning = GameView::default()
        .with_palette(TimeOfDay::Morning.palette())
        .render(&snap, viewport);
    let evening = GameView::default()
        .with_palette(TimeOfDay::Evening.palette())
        .render(&snap, viewport);

    assert_ne!(morning.get(0, 0), evening.get(0, 0));
    assert_eq!(morning.get(0, 0).unwrap().ch, evening.get(0, 0).unwrap().ch);
}
