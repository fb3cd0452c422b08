//! Declarative effect system for describing deferred event processing.

use core::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

use crate::Emitter;

type Task<Event> = Box<dyn FnOnce(Emitter<Event>) -> BoxFuture<'static, ()> + Send>;

/// Declarative description of work that produces events.
///
/// Effects are returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the new model. The
/// runtime turns them into a single future and hands it to its
/// [`Spawner`](crate::Spawner), so an effect may await I/O before emitting.
///
/// # Example
///
/// ```rust
/// use portfolio_contact::Effect;
///
/// #[derive(Clone)]
/// enum Event {
///     Load,
///     Loaded(String),
/// }
///
/// // Trigger a follow-up event
/// let effect = Effect::just(Event::Load);
///
/// // Await something, then report back
/// let effect: Effect<Event> = Effect::task(|emitter| async move {
///     emitter.emit(Event::Loaded("cached".to_string()));
/// });
///
/// // No side effects
/// let effect: Effect<Event> = Effect::none();
/// assert!(effect.is_none());
/// ```
pub struct Effect<Event: Send>(Vec<Task<Event>>);

impl<Event: Send + 'static> Effect<Event> {
    /// Create an empty effect.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Whether this effect does nothing when executed.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Create an effect that emits a single event.
    pub fn just(event: Event) -> Self {
        Self::task(move |emitter| async move {
            emitter.emit(event);
        })
    }

    /// Create an effect from an async task.
    ///
    /// The task receives its own [`Emitter`] handle and may emit any number of
    /// events, before or after awaiting.
    pub fn task<F, Fut>(task: F) -> Self
    where
        F: FnOnce(Emitter<Event>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(vec![Box::new(move |emitter| task(emitter).boxed())])
    }

    /// Combine multiple effects into a single effect.
    ///
    /// Tasks are started in the order given.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(effects.into_iter().flat_map(|effect| effect.0).collect())
    }

    /// Consume the effect, producing the future that runs all of its tasks.
    pub fn execute(self, emitter: &Emitter<Event>) -> BoxFuture<'static, ()> {
        let tasks: Vec<_> = self.0.into_iter().map(|task| task(emitter.clone())).collect();
        future::join_all(tasks).map(|_| ()).boxed()
    }
}
