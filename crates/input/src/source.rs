//! Input sources: the live terminal and a scripted queue for headless runs.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{map_key_event, should_quit};
use crate::types::{Key, KeyInput};

/// Non-blocking source of discrete key transitions.
pub trait InputSource {
    /// Next pending transition, or `None` when nothing is waiting.
    fn poll(&mut self) -> io::Result<Option<KeyInput>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        (**self).poll()
    }
}

/// Reads the crossterm event queue without blocking.
///
/// Non-key events and auto-repeats are skipped. Ctrl+C arrives as Escape so
/// every title treats it as exit.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if should_quit(key) {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(KeyInput::down(Key::Escape)));
                }
                continue;
            }
            if let Some(input) = map_key_event(key) {
                return Ok(Some(input));
            }
        }
        Ok(None)
    }
}

/// Replays a fixed list of transitions, then reports nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<KeyInput>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = KeyInput>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// One key-down per key
    pub fn presses(keys: &[Key]) -> Self {
        Self::new(keys.iter().copied().map(KeyInput::down))
    }

    pub fn push(&mut self, input: KeyInput) {
        self.events.push_back(input);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut input = ScriptedInput::presses(&[Key::Left, Key::Space]);
        input.push(KeyInput::up(Key::Space));
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.poll().ok().flatten(), Some(KeyInput::down(Key::Left)));
        assert_eq!(input.poll().ok().flatten(), Some(KeyInput::down(Key::Space)));
        assert_eq!(input.poll().ok().flatten(), Some(KeyInput::up(Key::Space)));
        assert_eq!(input.poll().ok().flatten(), None);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn drain(mut src: impl InputSource) -> usize {
            let mut n = 0;
            while let Ok(Some(_)) = src.poll() {
                n += 1;
            }
            n
        }
        let mut input = ScriptedInput::presses(&[Key::R, Key::Q]);
        assert_eq!(drain(&mut input), 2);
        assert_eq!(input.remaining(), 0);
    }
}
