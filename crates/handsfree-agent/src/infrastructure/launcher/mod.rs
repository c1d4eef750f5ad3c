//! Process launching for custom voice commands.
//!
//! A custom command maps an utterance to a program path; executing it
//! spawns the program detached from the agent. The agent never waits on or
//! reaps the child; once spawned it belongs to the user's session.

use std::sync::Mutex;

use tracing::debug;

use crate::application::dispatch_command::ProgramLauncher;

/// Launcher that spawns a real OS process.
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramLauncher for ProcessLauncher {
    fn launch(&self, path: &str) -> Result<(), String> {
        std::process::Command::new(path)
            .spawn()
            .map(|child| debug!("spawned {path:?} (pid {})", child.id()))
            .map_err(|e| e.to_string())
    }
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A mock launcher that records paths without spawning anything.
#[derive(Default)]
pub struct MockLauncher {
    /// Every path passed to `launch`, in call order.
    pub launched: Mutex<Vec<String>>,
    /// When `true`, every launch fails.
    pub should_fail: bool,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgramLauncher for MockLauncher {
    fn launch(&self, path: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("mock launch failure".to_string());
        }
        self.launched.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
