use super::lock::{ScrollGuard, ScrollLock, ScrollSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Open/closed state of the side panel.
///
/// While open the menu owns the background scroll lock; every way of closing
/// it, including dropping the menu, releases the lock.
pub struct Menu<S: ScrollSurface> {
    lock: ScrollLock<S>,
    guard: Option<ScrollGuard<S>>,
    state: MenuState,
}

impl<S: ScrollSurface> Menu<S> {
    pub fn new(lock: ScrollLock<S>) -> Self {
        Self {
            lock,
            guard: None,
            state: MenuState::Closed,
        }
    }

    pub const fn state(&self) -> MenuState {
        self.state
    }

    pub fn open(&mut self) -> MenuState {
        if self.state.is_open() {
            return self.state;
        }
        // A lock held elsewhere is left to its owner; the panel still opens.
        self.guard = match self.lock.acquire() {
            Ok(guard) => Some(guard),
            Err(err) => {
                tracing::warn!(%err, "opening menu without scroll lock");
                None
            }
        };
        self.state = MenuState::Open;
        self.state
    }

    pub fn close(&mut self) -> MenuState {
        self.guard = None;
        self.state = MenuState::Closed;
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        if self.state.is_open() {
            self.close()
        } else {
            self.open()
        }
    }
}
