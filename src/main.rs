//! Arcade launcher (default binary).
//!
//! `tui-arcade <title>` runs one title in the terminal. Titles: merge, blocks,
//! flappy, pushbox, mines. Runtime knobs come from `ARCADE_*` environment
//! variables (see `ArcadeConfig`).

use std::env;
use std::process::ExitCode;

use tui_arcade::engine::main_for;
use tui_arcade::types::TitleKind;

fn usage() {
    let names: Vec<&str> = TitleKind::ALL.iter().map(|k| k.as_str()).collect();
    eprintln!("usage: tui-arcade <{}>", names.join("|"));
}

fn main() -> ExitCode {
    let Some(arg) = env::args().nth(1) else {
        usage();
        return ExitCode::from(2);
    };
    let Some(kind) = TitleKind::from_str(&arg) else {
        eprintln!("[Arcade] Unknown title: {}", arg);
        usage();
        return ExitCode::from(2);
    };

    match main_for(kind) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[Arcade] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
