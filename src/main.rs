//! Terminal blockfall runner (default binary).
//!
//! Gravity runs on a `Ticker` thread; this thread polls keys and renders
//! snapshots. Set `BLOCKFALL_CONFIG` to a JSON file to override defaults and
//! `RUST_LOG` for logs on stderr.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_blockfall::core::{EngineConfig, GameSnapshot, GameState};
use tui_blockfall::engine::{SharedGame, Ticker};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, ResourceCache, TerminalRenderer, Viewport};

const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let game = SharedGame::new(GameState::from_config(&config).context("invalid configuration")?);
    let mut ticker = Ticker::spawn(game.clone(), config.frame_rate);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &game, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    ticker.stop();
    log::info!("final score {}", game.score());
    result
}

fn load_config() -> Result<EngineConfig> {
    let mut config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => read_config(Path::new(&path))?,
        None => EngineConfig::default(),
    };
    if config.seed.is_none() {
        config.seed = Some(clock_seed());
    }
    log::info!("using config {:?}", config);
    Ok(config)
}

fn read_config(path: &Path) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &SharedGame, config: &EngineConfig) -> Result<()> {
    let view = GameView::default();
    let resources = ResourceCache::with_defaults();
    let frame = Duration::from_secs(1) / config.frame_rate.max(1);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &resources, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(frame)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = handle_key_event(key) {
                game.apply_action(action);
            }
        }
    }
}
