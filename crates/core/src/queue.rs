//! Command queue - bounded ring buffer of pending commands
//!
//! Writes are gated on free slots: a full queue refuses the write instead of
//! overwriting the oldest entry. Read and write indices wrap modulo the
//! capacity and a slot only becomes free again once it has been consumed.

#[derive(Debug, Clone)]
pub struct CommandQueue<T: Copy, const N: usize> {
    slots: [Option<T>; N],
    read: usize,
    write: usize,
    free: usize,
}

impl<T: Copy, const N: usize> CommandQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            read: 0,
            write: 0,
            free: N,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn free_slots(&self) -> usize {
        self.free
    }

    pub fn len(&self) -> usize {
        N - self.free
    }

    pub fn is_empty(&self) -> bool {
        self.free == N
    }

    pub fn is_full(&self) -> bool {
        self.free == 0
    }

    /// Enqueue a command. Returns false (and drops it) when no slot is free.
    pub fn push(&mut self, cmd: T) -> bool {
        if self.free == 0 {
            return false;
        }
        debug_assert!(self.slots[self.write].is_none(), "write slot still occupied");
        self.slots[self.write] = Some(cmd);
        self.write = (self.write + 1) % N;
        self.free -= 1;
        true
    }

    /// Consume the oldest command.
    pub fn pop(&mut self) -> Option<T> {
        let cmd = self.slots[self.read].take()?;
        self.read = (self.read + 1) % N;
        self.free += 1;
        Some(cmd)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T: Copy, const N: usize> Default for CommandQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_writes_when_full() {
        let mut q: CommandQueue<u8, 3> = CommandQueue::new();
        assert!(q.push(1));
        assert!(q.push(2));
        assert!(q.push(3));
        assert!(q.is_full());
        assert!(!q.push(4));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.free_slots(), 1);
    }

    #[test]
    fn indices_wrap_in_fifo_order() {
        let mut q: CommandQueue<u8, 2> = CommandQueue::new();
        for round in 0..5u8 {
            assert!(q.push(round));
            assert!(q.push(round + 100));
            assert_eq!(q.pop(), Some(round));
            assert_eq!(q.pop(), Some(round + 100));
            assert_eq!(q.pop(), None);
        }
        assert!(q.is_empty());
        assert_eq!(q.free_slots(), 2);
    }

    #[test]
    fn pop_on_empty_does_not_free_slots() {
        let mut q: CommandQueue<u8, 4> = CommandQueue::new();
        assert_eq!(q.pop(), None);
        assert_eq!(q.free_slots(), 4);
        q.push(9);
        q.clear();
        assert_eq!(q.len(), 0);
    }
}
