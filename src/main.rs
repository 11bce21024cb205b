//! Astro Blitz entry point
//!
//! Terminal frontend: raw-mode setup, a dedicated input-reader thread, the
//! fixed-rate frame loop, and high-score persistence around the sim.

mod display;

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use rand::Rng;

use astro_blitz::consts::MS_PER_TICK;
use astro_blitz::highscores::HighScores;
use astro_blitz::render::render_world;
use astro_blitz::sim::{Direction, GameState, SpriteAtlas, TickInput, tick};

const FRAME: Duration = Duration::from_millis(MS_PER_TICK);

/// A key counts as held if its last press/repeat arrived within this many
/// frames. Covers terminals that never emit key-release events: OS
/// key-repeat refreshes the timestamp faster than the window expires.
const HOLD_WINDOW: u64 = 4;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn held_direction(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Direction {
    let held = |codes: &[KeyCode]| codes.iter().any(|c| is_held(key_frame, c, frame));

    if held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]) {
        Direction::Up
    } else if held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]) {
        Direction::Down
    } else if held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]) {
        Direction::Left
    } else if held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]) {
        Direction::Right
    } else {
        Direction::Stop
    }
}

/// Run seed: `ASTRO_BLITZ_SEED` for reproducible runs, entropy otherwise
fn seed() -> u64 {
    std::env::var("ASTRO_BLITZ_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::rng().random())
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread to blocking event reads so the frame loop never
    // stalls on input I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let score_path = HighScores::default_path();
    let seed = seed();
    log::info!("starting run with seed {seed}");

    let mut state = GameState::new(seed, SpriteAtlas::default(), HighScores::load(&score_path));
    let mut renderer = display::TermRenderer::new(&mut *out)?;

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut saved_resets = state.stage_resets;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut toggle_view = false;
        let mut quit = false;
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            quit = true;
                        }
                        KeyCode::Char('h') | KeyCode::Char('H') => toggle_view = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if quit {
            if let Err(err) = state.highscores.save(&score_path) {
                log::warn!("high score save failed: {err}");
            }
            return Ok(());
        }

        let input = TickInput {
            direction: held_direction(&key_frame, frame),
            fire: is_held(&key_frame, &KeyCode::Char(' '), frame),
            toggle_view,
        };

        tick(&mut state, &input);

        // A stage reset just folded a score into the table; persist it
        if state.stage_resets != saved_resets {
            saved_resets = state.stage_resets;
            if let Err(err) = state.highscores.save(&score_path) {
                log::warn!("high score save failed: {err}");
            }
        }

        renderer.begin_frame()?;
        render_world(&mut renderer, &state);
        renderer.end_frame()?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
