use anyhow::Result;

use tui_arcade::types::TitleKind;

fn main() -> Result<()> {
    tui_arcade::engine::main_for(TitleKind::Pushbox)
}
