//! One adapter per title: key mapping and tick pacing around a core game.

mod blocks;
mod flappy;
mod merge;
mod mines;
mod pushbox;

pub use blocks::BlocksTitle;
pub use flappy::FlappyTitle;
pub use merge::MergeTitle;
pub use mines::MinesTitle;
pub use pushbox::PushboxTitle;
