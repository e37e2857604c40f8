//! The per-title loop.
//!
//! ```text
//! loop {
//!     drain input
//!     for each due tick { advance }
//!     if advanced { render; flush }
//!     wait for the next deadline
//! }
//! ```
//!
//! Input is fully drained before any tick runs, and every tick settles
//! before the frame is painted.

use anyhow::Result;

use crate::clock::Clock;
use crate::input::InputSource;
use crate::log::{EventKind, EventLog, EventValue};
use crate::pacer::{FramePacer, Pacing};
use crate::term::{DisplaySink, PixelBuffer};
use crate::title::{KeyEffect, Title};
use crate::types::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub pacing: Pacing,
    /// Stop after this many rendered frames.
    pub max_frames: Option<u64>,
    /// Seed reported in the start event.
    pub seed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames flushed to the sink, including the first one.
    pub frames: u64,
    pub ticks: u64,
    pub restarts: u32,
    pub status: Status,
    pub score: u32,
}

pub fn run<T, I, S, C>(
    title: &mut T,
    input: &mut I,
    sink: &mut S,
    clock: &mut C,
    log: &mut EventLog,
    opts: &RunOptions,
) -> Result<RunSummary>
where
    T: Title + ?Sized,
    I: InputSource + ?Sized,
    S: DisplaySink + ?Sized,
    C: Clock + ?Sized,
{
    let kind = title.kind();
    let (w, h) = title.screen_size();
    let mut fb = PixelBuffer::new(w, h);

    let mut summary = RunSummary {
        frames: 0,
        ticks: 0,
        restarts: 0,
        status: title.status(),
        score: title.score(),
    };

    log.event(EventKind::Start, kind, 0, EventValue::Number(opts.seed as u64));
    title.render(&mut fb);
    sink.present(&fb)?;
    summary.frames += 1;

    let mut pacer = FramePacer::new(title.fps(), clock.now_us(), opts.pacing);
    let mut last_status = summary.status;
    let mut last_score = summary.score;

    'frames: loop {
        if opts.max_frames.is_some_and(|max| summary.frames >= max) {
            break;
        }

        while let Some(key) = input.poll()? {
            match title.handle_key(key) {
                KeyEffect::Exited => break 'frames,
                KeyEffect::Restarted => {
                    summary.restarts += 1;
                    log.event(EventKind::Restart, kind, summary.frames, EventValue::Number(0));
                }
                KeyEffect::Handled | KeyEffect::Ignored => {}
            }
        }

        let due = pacer.frames_due(clock.now_us());
        for _ in 0..due {
            title.advance(pacer.budget_us());
            summary.ticks += 1;
        }

        if due > 0 {
            title.render(&mut fb);
            sink.present(&fb)?;
            summary.frames += 1;

            let status = title.status();
            if status != last_status {
                log.status(kind, summary.frames, status);
                last_status = status;
            }
            let score = title.score();
            if score != last_score {
                log.score(kind, summary.frames, score);
                last_score = score;
            }

            if opts.max_frames.is_some_and(|max| summary.frames >= max) {
                break;
            }
        }

        pacer.wait(clock);
    }

    summary.status = title.status();
    summary.score = title.score();
    log.event(
        EventKind::Exit,
        kind,
        summary.frames,
        EventValue::Text(summary.status.as_str()),
    );
    Ok(summary)
}
