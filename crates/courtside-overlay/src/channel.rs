//! One-slot latest-wins hand-off between the frame-producer context and
//! the UI context.
//!
//! Built on `tokio::sync::watch`: publishing overwrites the slot, the
//! consumer only ever observes the most recent completed value, and
//! neither side blocks the other. Values cross the boundary as complete
//! immutable snapshots, never field by field.

use tokio::sync::watch;

/// Create a linked sender/receiver pair seeded with `initial`.
///
/// The receiver half is the render state the UI reads each repaint; the
/// sender half lives on the producer thread.
pub fn overlay_channel<T: Clone>(initial: T) -> (OverlaySender<T>, RenderState<T>) {
    let (tx, rx) = watch::channel(initial);
    (OverlaySender { tx }, RenderState { rx })
}

/// Producer half of the hand-off.
#[derive(Debug)]
pub struct OverlaySender<T> {
    tx: watch::Sender<T>,
}

impl<T> OverlaySender<T> {
    /// Publish a new value, superseding whatever the consumer has not
    /// yet observed.
    ///
    /// Returns false when the consumer has torn down (render state
    /// dropped); the call is then a no-op, the value is discarded, and
    /// nothing panics. Producers treat a false return as the signal to
    /// stop.
    pub fn publish(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    /// Whether the consumer side still exists.
    pub fn is_live(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Consumer half: the single current value visible to the UI context.
#[derive(Debug, Clone)]
pub struct RenderState<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> RenderState<T> {
    /// The most recently published value. Always fully formed; marks it
    /// as seen so `changed` waits for the next publish.
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Peek without consuming the change notification.
    pub fn peek(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait until a value newer than the last `latest()` call arrives.
    ///
    /// Returns false when the producer side has gone away.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
