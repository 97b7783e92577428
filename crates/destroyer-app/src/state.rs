//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use destroyer_core::commands::PlayerCommand;
use destroyer_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to fold into the next tick's intents.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handle to a running game loop.
pub struct LoopHandle {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot for polling. `None` until the first tick.
    pub latest_snapshot: SharedSnapshot,
    pub thread: std::thread::JoinHandle<()>,
}

impl LoopHandle {
    pub fn send(&self, command: PlayerCommand) -> Result<(), String> {
        self.command_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|e| format!("Failed to send command: {}", e))
    }

    /// Clone of the most recent snapshot.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Ask the loop to stop and wait for the thread to exit.
    pub fn shutdown(self) -> Result<(), String> {
        // The loop also exits when the channel disconnects.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread
            .join()
            .map_err(|_| "game loop thread panicked".to_string())
    }
}

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = new_shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }
}
