//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for rendering Props.
///
/// Implement this trait to connect the runtime to a rendering target (a web
/// view binding, a terminal, a text sink, ...).
///
/// [`render`](Self::render) is called whenever the model changes, receiving
/// fresh Props derived from the current state via
/// [`MvuLogic::view`](crate::MvuLogic::view).
pub trait Renderer<Props> {
    /// Render the given props.
    ///
    /// Props may contain callbacks (via [`Emitter`](crate::Emitter)) that
    /// trigger new events.
    fn render(&mut self, props: Props);
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone for assertions
/// and hand the other to a [`TestMvuRuntime`](crate::TestMvuRuntime).
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Use it to assert on Props or to invoke a Props callback. Callbacks
    /// only enqueue events, so invoking them while the renders are borrowed
    /// is fine.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Access the most recent render.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        self.with_renders(|renders| f(renders.last().expect("no render captured yet")))
    }
}
