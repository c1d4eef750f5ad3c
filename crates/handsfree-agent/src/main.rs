//! Hands-free controller agent entry point.
//!
//! Wires together the config, the injection use cases, and the control
//! source, then runs the event dispatch loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()             -- TOML config, defaults on first run
//!  └─ InjectInputUseCase        -- InputSink + ScreenMetrics adapters
//!  └─ DispatchCommandUseCase    -- utterance -> action
//!  └─ TrackHandUseCase          -- hand frame -> cursor move
//!  └─ event dispatch loop
//!       ├─ ControlEvent::Utterance -> DispatchCommandUseCase
//!       ├─ ControlEvent::HandFrame -> TrackHandUseCase
//!       └─ Ctrl-C                  -> shutdown
//! ```
//!
//! # Control source
//!
//! The `ScriptedSource` used here stands in for the sensor SDK adapter: it
//! reports a device as present and delivers no events, so the agent idles
//! until Ctrl-C. A production build replaces it with the adapter that
//! bridges the vendor runtime's skeleton-frame and speech-recognition
//! callbacks into the same channel, configured with the smoothing
//! parameters and the dispatch table's vocabulary.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use handsfree_agent::application::dispatch_command::{DispatchCommandUseCase, ProgramLauncher};
use handsfree_agent::application::inject_input::{InjectInputUseCase, InputSink, ScreenMetrics};
use handsfree_agent::application::track_hand::TrackHandUseCase;
use handsfree_agent::infrastructure::launcher::ProcessLauncher;
use handsfree_agent::infrastructure::source::{ControlEvent, ControlSource, ScriptedSource};
use handsfree_agent::infrastructure::storage::config;
use handsfree_core::CommandTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;

    // Initialise structured logging; RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.agent.log_level.clone())),
        )
        .init();

    info!("hands-free controller agent starting");

    // First run: write the defaults so the user has a file to edit.
    let config_path = config::config_file_path()?;
    if !config_path.exists() {
        config::save_config(&cfg)?;
        info!("wrote default config to {}", config_path.display());
    }

    // ── OS adapters ───────────────────────────────────────────────────────────
    #[cfg(target_os = "windows")]
    let sink: Arc<dyn InputSink> =
        Arc::new(handsfree_agent::infrastructure::injection::NativeInputSink::new());
    #[cfg(not(target_os = "windows"))]
    let sink: Arc<dyn InputSink> =
        Arc::new(handsfree_agent::infrastructure::injection::mock::MockInputSink::new());

    #[cfg(target_os = "windows")]
    let screen: Arc<dyn ScreenMetrics> =
        Arc::new(handsfree_agent::infrastructure::screen::NativeScreenMetrics::new());
    #[cfg(not(target_os = "windows"))]
    let screen: Arc<dyn ScreenMetrics> =
        Arc::new(handsfree_agent::infrastructure::screen::MockScreenMetrics::single_1080p());

    // ── Use cases ─────────────────────────────────────────────────────────────
    let injector = Arc::new(InjectInputUseCase::new(sink, screen));
    let tracking = Arc::new(AtomicBool::new(false));
    let table = CommandTable::new(cfg.commands.clone(), cfg.custom_commands.clone());
    debug!(vocabulary = ?table.vocabulary(), "recognition vocabulary");

    let launcher: Arc<dyn ProgramLauncher> = Arc::new(ProcessLauncher::new());
    let dispatcher = DispatchCommandUseCase::new(
        table,
        Arc::clone(&injector),
        launcher,
        Arc::clone(&tracking),
        cfg.agent.wheel_step,
    );
    let mut tracker = TrackHandUseCase::new(Arc::clone(&injector), Arc::clone(&tracking));

    // ── Control source ────────────────────────────────────────────────────────
    let source: Box<dyn ControlSource> =
        Box::new(ScriptedSource::new(Vec::new()).with_smoothing(cfg.tracker));
    if !source.available() {
        warn!("no capture device detected; hand tracking and voice control are disabled");
    }
    let mut events = source.start();

    // ── Event dispatch loop ───────────────────────────────────────────────────
    info!("agent ready; say \"start\" to enable hand tracking");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            maybe_event = events.recv() => match maybe_event {
                Some(ControlEvent::HandFrame { x, y }) => {
                    if let Err(e) = tracker.handle_frame(x, y) {
                        error!("hand frame injection error: {e}");
                    }
                }
                Some(ControlEvent::Utterance(text)) => {
                    match dispatcher.dispatch(&text) {
                        Ok(true) => {}
                        Ok(false) => debug!("utterance {text:?} matched nothing"),
                        Err(e) => error!("command dispatch error: {e}"),
                    }
                }
                None => {
                    info!("control source closed");
                    break;
                }
            }
        }
    }

    info!("hands-free controller agent stopped");
    Ok(())
}
