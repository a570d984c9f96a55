//! Update loop running on its own thread.
//!
//! Measures wall-clock time between frames and feeds it to
//! [`SharedGame::tick`]. The engine never reads a clock itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::shared::SharedGame;

/// Handle to a running update thread. Stops and joins on drop.
#[derive(Debug)]
pub struct Ticker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the update loop, ticking `game` about `frame_rate` times a second.
    pub fn spawn(game: SharedGame, frame_rate: u32) -> Self {
        let frame = Duration::from_secs(1) / frame_rate.max(1);
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || {
            log::info!("ticker started ({} fps)", frame_rate);
            let mut last = Instant::now();
            while flag.load(Ordering::Acquire) {
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f32();
                last = now;

                game.tick(dt);

                let spent = now.elapsed();
                if let Some(rest) = frame.checked_sub(spent) {
                    thread::sleep(rest);
                }
            }
            log::info!("ticker stopped");
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Signal the loop to exit and wait for it.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::GamePhase;

    #[test]
    fn test_ticker_drives_gravity() {
        let game = SharedGame::new(GameState::new(10, 20, 3));
        game.start();
        let start = game.snapshot().current;

        let mut ticker = Ticker::spawn(game.clone(), 200);
        thread::sleep(Duration::from_millis(700));
        ticker.stop();

        assert!(!ticker.is_running());
        assert_ne!(game.snapshot().current, start);
    }

    #[test]
    fn test_ticker_idle_in_menu() {
        let game = SharedGame::new(GameState::new(10, 20, 3));
        let before = game.snapshot();

        let ticker = Ticker::spawn(game.clone(), 200);
        thread::sleep(Duration::from_millis(100));
        drop(ticker);

        assert_eq!(game.phase(), GamePhase::MainMenu);
        assert_eq!(game.snapshot(), before);
    }
}
