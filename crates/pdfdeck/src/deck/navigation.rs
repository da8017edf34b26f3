/// Cursor over the slide deck, always within `[0, count)`.
///
/// Navigation past either end saturates rather than wrapping, and an
/// out-of-range jump clamps silently; only document load can fail loudly.
#[derive(Debug, Clone)]
pub struct Navigation {
    current: usize,
    count: usize,
}

impl Navigation {
    /// `count` must be at least 1; the load path rejects empty documents
    /// before navigation becomes reachable.
    pub fn new(count: usize) -> Self {
        debug_assert!(count >= 1);
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance by one. Returns whether the cursor moved (the signal that a
    /// layout refresh is due).
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.count {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back by one. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to an arbitrary slide, clamping to the last one. Returns whether
    /// the cursor moved.
    pub fn jump(&mut self, index: usize) -> bool {
        let target = index.min(self.count - 1);
        if target == self.current {
            return false;
        }
        self.current = target;
        true
    }
}
