//! Event emitter for embedding callbacks in Props.

use flume::Sender;

/// Event emitter that can be embedded in Props.
///
/// Clone this handle to create callbacks in your Props that trigger events
/// when invoked (e.g. by a button press), or move it into an effect task.
///
/// `Emitter` wraps a channel sender, so it is cheap to clone and safe to use
/// from any thread.
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// Queues the event for the runtime. Events emitted after the runtime has
    /// been dropped are discarded.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            tracing::trace!("event emitted after runtime shutdown; dropped");
        }
    }
}
