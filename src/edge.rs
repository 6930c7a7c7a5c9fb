//! Edge-pending flag shared between the button handler and the main loop.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::hardware::traits::Button;

/// Single-slot "button was pressed" signal.
///
/// The handler only ever raises it and the main loop only ever takes it, so a
/// press can never be lost between the two. Presses that arrive before the
/// loop gets around to [`EdgeFlag::take`] collapse into one.
#[derive(Debug)]
pub struct EdgeFlag {
    pending: AtomicBool,
}

impl EdgeFlag {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Record a falling edge. Safe to call from interrupt context.
    #[inline]
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Test-and-clear: returns `true` if at least one edge arrived since the
    /// previous call.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed)
    }
}

impl Default for EdgeFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for the next press on `button` and mark it in `flag`.
///
/// This is the whole body of the interrupt-side handler; it never touches the
/// blink state.
pub async fn relay_press<B: Button>(button: &mut B, flag: &EdgeFlag) {
    button.wait_for_press().await;
    flag.raise();
}
