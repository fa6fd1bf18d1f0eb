//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_snake::term`.
//! Time is measured here and fed to the session, which decides how many ticks
//! are due; key presses are applied between ticks on the same thread.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use tui_snake::core::{GameConfig, GameSnapshot};
use tui_snake::engine::Session;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{
    fingerprint, with_screen, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};

/// How often the frozen game-over screen is refreshed.
const STATIC_REDRAW_MS: u64 = 250;

#[derive(Parser)]
#[command(name = "tui-snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in tiles
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in tiles
    #[arg(long)]
    height: Option<u32>,

    /// Milliseconds per tick
    #[arg(long)]
    tick_ms: Option<u32>,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Log destination (the terminal itself is taken by the game)
    #[arg(long, default_value = "tui-snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !matches!(cli.log_level, LogLevel::Off) {
        let file = File::create(&cli.log_file)
            .with_context(|| format!("cannot create log file {}", cli.log_file.display()))?;
        WriteLogger::init(cli.log_level.into(), Config::default(), file)
            .context("failed to initialize logger")?;
    }

    let config = build_config(&cli)?;
    info!("starting tui-snake with {:?}", config);
    let mut session = Session::try_new(config).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    let result = with_screen(&mut term, |term| run(term, &mut session));

    let state = session.state();
    info!(
        "exit: score={} game_over={} ticks={}",
        state.score(),
        state.game_over(),
        state.ticks()
    );
    result
}

/// Defaults, then the config file, then command-line flags.
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    config.seed = Some(cli.seed.or(config.seed).unwrap_or_else(rand::random));

    Ok(config)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&snap), session.finished()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = if session.finished() {
            Duration::from_millis(STATIC_REDRAW_MS)
        } else {
            Duration::from_millis(session.time_until_next_tick_ms() as u64)
                .saturating_sub(last_tick.elapsed())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.on_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick. Whole milliseconds are handed over; the sub-millisecond rest
        // stays on `last_tick` for the next round.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        session.on_elapsed(elapsed_ms);
    }
}
