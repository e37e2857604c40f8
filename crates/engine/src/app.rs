//! Terminal launch: raw mode in, run one title, terminal restored on every path.

use anyhow::Result;

use crate::clock::SystemClock;
use crate::config::ArcadeConfig;
use crate::input::CrosstermInput;
use crate::log::EventLog;
use crate::runner::{run, RunOptions, RunSummary};
use crate::term::TerminalSink;
use crate::title::make_title;
use crate::types::TitleKind;

/// Run `kind` in the current terminal until it exits.
pub fn launch(kind: TitleKind, config: &ArcadeConfig) -> Result<RunSummary> {
    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            eprintln!("[Arcade] Event log disabled ({}): {}", path, e);
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut title = make_title(kind, config.seed);
    let (w, h) = title.screen_size();
    let opts = RunOptions {
        pacing: config.pacing,
        max_frames: config.max_frames,
        seed: config.seed,
    };

    let mut sink = TerminalSink::new(w, h);
    sink.enter()?;

    let result = run(
        title.as_mut(),
        &mut CrosstermInput::new(),
        &mut sink,
        &mut SystemClock::new(),
        &mut log,
        &opts,
    );

    // Always try to restore terminal state.
    let _ = sink.exit();
    log.finish();
    result
}

/// Entry point shared by the binaries: launch, then report in cooked mode.
pub fn main_for(kind: TitleKind) -> Result<()> {
    let config = ArcadeConfig::from_env();
    let summary = launch(kind, &config)?;
    eprintln!(
        "[Arcade] {} {} after {} frames, score {}",
        kind.as_str(),
        summary.status.as_str(),
        summary.frames,
        summary.score
    );
    Ok(())
}
