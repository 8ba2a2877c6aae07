//! Background scroll locking for the open side panel.
//!
//! The document has one `overflow` style, so the lock is single-owner: a
//! [`ScrollLock`] handle hands out at most one [`ScrollGuard`] at a time and the
//! guard puts the previous value back when it is dropped.

use core::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use leptos::prelude::document;
use thiserror::Error;

/// Value written to the surface while the lock is held.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Something whose background scrolling can be switched off through an
/// `overflow` style value.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface {
    /// Current `overflow` value, empty when unset.
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// `document.body` of the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn overflow(&self) -> String {
        document()
            .body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let Some(body) = document().body() else {
            tracing::warn!("document has no body; scroll lock not applied");
            return;
        };
        let style = body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(drop)
        } else {
            style.set_property("overflow", value)
        };
        if let Err(err) = result {
            tracing::warn!(?err, value, "failed to set body overflow");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrollLockError {
    #[error("background scroll is already locked by another panel")]
    AlreadyHeld,
}

/// Shared handle to the document scroll lock.
pub struct ScrollLock<S> {
    surface: Arc<S>,
    held: Arc<AtomicBool>,
}

impl<S> Clone for ScrollLock<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            held: Arc::clone(&self.held),
        }
    }
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Arc::new(surface),
            held: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// Disables background scrolling until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollLockError::AlreadyHeld`] while another guard is alive.
    pub fn acquire(&self) -> Result<ScrollGuard<S>, ScrollLockError> {
        if self
            .held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ScrollLockError::AlreadyHeld);
        }

        let previous = self.surface.overflow();
        self.surface.set_overflow(LOCKED_OVERFLOW);
        tracing::debug!(previous = %previous, "background scroll locked");

        Ok(ScrollGuard {
            surface: Arc::clone(&self.surface),
            held: Arc::clone(&self.held),
            previous,
        })
    }
}

/// Proof of ownership of the scroll lock. Dropping it restores scrolling.
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollGuard<S: ScrollSurface> {
    surface: Arc<S>,
    held: Arc<AtomicBool>,
    previous: String,
}

impl<S: ScrollSurface> fmt::Debug for ScrollGuard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollGuard")
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

impl<S: ScrollSurface> Drop for ScrollGuard<S> {
    fn drop(&mut self) {
        self.surface.set_overflow(&self.previous);
        self.held.store(false, Ordering::Release);
        tracing::debug!(restored = %self.previous, "background scroll unlocked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::Sequence;

    #[test]
    fn test_guard_restores_previous_value_once() {
        let mut surface = MockScrollSurface::new();
        let mut seq = Sequence::new();
        surface
            .expect_overflow()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "auto".to_owned());
        surface
            .expect_set_overflow()
            .withf(|value| value == LOCKED_OVERFLOW)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_set_overflow()
            .withf(|value| value == "auto")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let lock = ScrollLock::new(surface);
        let guard = lock.acquire().unwrap();
        assert!(lock.is_held());
        drop(guard);
        assert!(!lock.is_held());
    }

    #[test]
    fn test_second_acquire_is_rejected() {
        let mut surface = MockScrollSurface::new();
        surface.expect_overflow().times(1).returning(String::new);
        surface.expect_set_overflow().times(2).return_const(());

        let lock = ScrollLock::new(surface);
        let other_handle = lock.clone();
        let guard = lock.acquire().unwrap();
        assert_matches!(other_handle.acquire(), Err(ScrollLockError::AlreadyHeld));
        drop(guard);
    }

    #[test]
    fn test_lock_is_reusable_after_release() {
        let mut surface = MockScrollSurface::new();
        surface.expect_overflow().times(2).returning(String::new);
        surface.expect_set_overflow().times(4).return_const(());

        let lock = ScrollLock::new(surface);
        drop(lock.acquire().unwrap());
        let guard = lock.acquire();
        assert_matches!(guard, Ok(_));
    }

    #[test]
    fn test_guard_debug_shows_previous_value() {
        let mut surface = MockScrollSurface::new();
        surface.expect_overflow().times(1).returning(|| "scroll".to_owned());
        surface.expect_set_overflow().times(2).return_const(());

        let lock = ScrollLock::new(surface);
        let guard = lock.acquire();
        let rendered = format!("{guard:?}");
        assert!(rendered.starts_with("Ok(ScrollGuard"), "{rendered}");
        assert!(rendered.contains("previous: \"scroll\""), "{rendered}");
    }
}
