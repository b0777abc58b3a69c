//! Terminal Snake runner (default binary).
//!
//! Owns the one game, the one best-score store and the one renderer. The loop
//! waits for input until the next tick is due, then lets the core run at most
//! one tick.

mod cli;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit, InputHandler, InputSource, SwipeTracker};
use tui_snake::store::{default_scores_path, BestScore, JsonFileStore, KeyValueStore};
use tui_snake::term::{FrameBuffer, GameView, Palette, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::types::{CoreEvent, GameAction};

use cli::Args;

/// Upper bound on one input wait, so static screens still get their heartbeat.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let config = args.game_config().context("invalid game settings")?;
    let scores_path = args.scores_file.clone().unwrap_or_else(default_scores_path);
    let store = JsonFileStore::open(&scores_path)
        .with_context(|| format!("cannot open scores file {}", scores_path.display()))?;
    let mut best = BestScore::load(store);

    let time_of_day = args.theme.resolve();
    tracing::info!(
        width = config.width,
        height = config.height,
        interval_ms = config.initial_interval_ms,
        seed = config.seed,
        best = best.value(),
        theme = %time_of_day,
        "starting"
    );

    let game = GameState::new(config)?.with_best_score(best.value());

    let mut term = TerminalRenderer::new().context("cannot start the game")?;
    term.enter()?;
    let result = run(&mut term, game, &mut best, time_of_day.palette());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    // The terminal belongs to the game; without a file there is nowhere to log.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run<S: KeyValueStore>(
    term: &mut TerminalRenderer,
    mut game: GameState,
    best: &mut BestScore<S>,
    palette: Palette,
) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let view = GameView::default().with_palette(palette);
    let mut input = InputHandler::new();
    let mut swipe = SwipeTracker::default();
    let mut throttle = RenderThrottle::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let (mut width, mut height) = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        game.snapshot_into(&mut snap);
        let viewport = Viewport::new(width, height);
        if throttle.should_render(now_ms(), &snap) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = game
            .time_until_next_tick(now_ms())
            .map(Duration::from_millis)
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        if event::poll(timeout)? {
            let mut steer = |source: InputSource, action: GameAction| {
                let now = now_ms();
                if let Some(action) = input.accept(now, action, source) {
                    game.apply_action(action, now);
                }
            };

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!(score = snap.score, "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        steer(InputSource::Keyboard, action);
                    }
                }
                Event::Mouse(mouse) => {
                    let button = match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            view.button_at(&snap, viewport, mouse.column, mouse.row)
                        }
                        _ => None,
                    };
                    if let Some(direction) = button {
                        swipe.cancel();
                        steer(InputSource::Button, GameAction::Steer(direction));
                    } else if let Some(direction) = swipe.handle_mouse_event(mouse) {
                        steer(InputSource::Swipe, GameAction::Steer(direction));
                    }
                }
                Event::Resize(w, h) => {
                    width = w;
                    height = h;
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        if game.poll(now_ms()).is_none() {
            continue;
        }
        match game.take_last_event() {
            Some(CoreEvent::FoodEaten {
                score,
                level,
                leveled_up: true,
            }) => {
                tracing::info!(level, score, interval_ms = game.interval_ms(), "level up");
            }
            Some(CoreEvent::GameOver {
                reason,
                score,
                new_best,
            }) => {
                tracing::info!(reason = reason.as_str(), score, new_best, "game over");
                if let Err(err) = best.record(score) {
                    tracing::warn!(error = %err, score, "failed to save best score");
                }
            }
            _ => {}
        }
    }
}
