//! Global pointer-capture lifecycle for drag-resize.
//!
//! A drag listens to pointer movement everywhere, not just over the
//! divider, so for its duration the engine holds an exclusive capture
//! on the host's global pointer events. [`DragController`] guarantees
//! at most one capture is live and that release is safe to call on
//! every exit path, including teardown.

use tracing::warn;

// =============================================================================
// TYPES
// =============================================================================

/// Host-side hooks for global pointer capture.
///
/// `capture_pointer` and `release_pointer` are only ever called in
/// strictly alternating order, starting with a capture.
pub trait PointerHost {
    /// Start routing all pointer movement to the drag, regardless of
    /// what the pointer is over.
    fn capture_pointer(&mut self);
    /// Stop routing pointer movement and restore normal hit testing.
    fn release_pointer(&mut self);
}

/// Owns the single pointer capture a drag may hold.
#[derive(Debug, Default)]
pub struct DragController {
    held: bool,
}

// =============================================================================
// LIFECYCLE
// =============================================================================

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a capture is currently held.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Acquire the pointer capture. Returns `false` without touching
    /// the host if a capture is already held.
    pub fn acquire(&mut self, host: &mut dyn PointerHost) -> bool {
        if self.held {
            warn!("pointer capture already held, ignoring acquire");
            return false;
        }
        host.capture_pointer();
        self.held = true;
        true
    }

    /// Release the pointer capture. Idempotent: calling without a held
    /// capture does nothing.
    pub fn release(&mut self, host: &mut dyn PointerHost) {
        if !self.held {
            return;
        }
        host.release_pointer();
        self.held = false;
    }
}

// =============================================================================
// TESTS
// =============================================================================
