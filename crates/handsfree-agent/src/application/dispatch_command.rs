//! DispatchCommandUseCase: executes the action behind a recognized utterance.
//!
//! The speech engine delivers the exact recognized text; the core
//! [`CommandTable`] resolves it to a [`ControlAction`], and this use case
//! executes it: injection intents go to the [`InjectInputUseCase`], program
//! launches go to a [`ProgramLauncher`] port, and the tracking toggles flip
//! the shared flag read by the hand tracker.
//!
//! Unrecognized utterances are ignored (logged at debug level); that is the
//! documented behaviour, not an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use handsfree_core::{CommandTable, ControlAction, VirtualKey};
use thiserror::Error;
use tracing::{debug, info};

use crate::application::inject_input::{InjectError, InjectInputUseCase};

/// Error type for command dispatch operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Executing an injection intent failed.
    #[error(transparent)]
    Inject(#[from] InjectError),
    /// Spawning a custom command's program failed.
    #[error("failed to launch {path}: {reason}")]
    Launch { path: String, reason: String },
}

/// Port for spawning the program behind a custom voice command.
///
/// Infrastructure implementations spawn a real process; test
/// implementations record calls.
pub trait ProgramLauncher: Send + Sync {
    /// Spawns the program at `path`, detached from the agent.
    fn launch(&self, path: &str) -> Result<(), String>;
}

/// The Dispatch Command use case.
pub struct DispatchCommandUseCase {
    table: CommandTable,
    injector: Arc<InjectInputUseCase>,
    launcher: Arc<dyn ProgramLauncher>,
    tracking: Arc<AtomicBool>,
    wheel_step: i32,
}

impl DispatchCommandUseCase {
    /// Creates a new use case.
    ///
    /// `tracking` is the flag shared with the hand tracker; `wheel_step` is
    /// the magnitude sent per scroll command.
    pub fn new(
        table: CommandTable,
        injector: Arc<InjectInputUseCase>,
        launcher: Arc<dyn ProgramLauncher>,
        tracking: Arc<AtomicBool>,
        wheel_step: i32,
    ) -> Self {
        Self {
            table,
            injector,
            launcher,
            tracking,
            wheel_step,
        }
    }

    /// Resolves and executes one recognized utterance.
    ///
    /// Returns `true` when the utterance matched an action, `false` when it
    /// was ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the matched action fails to execute.
    pub fn dispatch(&self, utterance: &str) -> Result<bool, DispatchError> {
        let Some(action) = self.table.dispatch(utterance) else {
            debug!("ignoring unrecognized utterance {utterance:?}");
            return Ok(false);
        };
        debug!("utterance {utterance:?} resolved to {action:?}");
        self.execute(&action)?;
        Ok(true)
    }

    fn execute(&self, action: &ControlAction) -> Result<(), DispatchError> {
        match action {
            ControlAction::ClickLeft => self.injector.click_left()?,
            ControlAction::ClickRight => self.injector.click_right()?,
            ControlAction::DoubleClick => self.injector.double_click_left()?,
            // Wheel sign convention: up is negative, down is positive.
            ControlAction::ScrollUp => self.injector.wheel(-self.wheel_step)?,
            ControlAction::ScrollDown => self.injector.wheel(self.wheel_step)?,
            ControlAction::CloseWindow => {
                self.injector.key_combo(&[VirtualKey::Alt], VirtualKey::F4)?
            }
            ControlAction::Back => self.injector.key_press(VirtualKey::Backspace)?,
            ControlAction::MinimiseWindow => self
                .injector
                .key_combo(&[VirtualKey::Alt, VirtualKey::Space], VirtualKey::KeyN)?,
            ControlAction::MaximiseWindow => self
                .injector
                .key_combo(&[VirtualKey::Alt, VirtualKey::Space], VirtualKey::KeyX)?,
            ControlAction::Launch(path) => {
                info!("launching custom command {path:?}");
                self.launcher
                    .launch(path)
                    .map_err(|reason| DispatchError::Launch {
                        path: path.clone(),
                        reason,
                    })?;
            }
            ControlAction::StartTracking => {
                self.tracking.store(true, Ordering::Release);
                info!("hand tracking enabled");
            }
            ControlAction::StopTracking => {
                self.tracking.store(false, Ordering::Release);
                info!("hand tracking disabled");
            }
        }
        Ok(())
    }

    /// The flag shared with the hand tracker.
    pub fn tracking_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.tracking)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
