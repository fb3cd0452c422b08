//! The MVU runtime that orchestrates the event loop.

use futures::future::BoxFuture;

use flume::Receiver;

use crate::{Effect, Emitter, MvuLogic, Renderer};

/// A spawner for executing effect futures on an async runtime.
///
/// This lets the embedding application choose its executor (tokio,
/// async-std, a test executor, ...). Closures and function pointers with the
/// right signature implement it through the blanket implementation.
pub trait Spawner {
    /// Spawn a future on the async runtime.
    fn spawn(&self, future: BoxFuture<'static, ()>);
}

impl<F> Spawner for F
where
    F: Fn(BoxFuture<'static, ()>),
{
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self(future)
    }
}

/// The MVU runtime that orchestrates the event loop.
///
/// It:
/// 1. Initializes the Model and initial Effects via [`MvuLogic::init`]
/// 2. Processes events through [`MvuLogic::update`]
/// 3. Reduces the Model to Props via [`MvuLogic::view`]
/// 4. Delivers Props to the [`Renderer`]
/// 5. Hands each non-empty [`Effect`] to the [`Spawner`]
///
/// Events are queued through a channel and processed one at a time on the
/// task that awaits [`MvuRuntime::run`].
///
/// For tests with manual control, use [`TestMvuRuntime`] with a
/// [`TestRenderer`](crate::TestRenderer).
pub struct MvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    model: Model,
    emitter: Emitter<Event>,
    spawner: Spawn,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render, Spawn>
    MvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Create a new runtime. Nothing happens until [`run`](Self::run) is awaited.
    pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        MvuRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter: Emitter::new(event_sender),
            spawner,
            _props: core::marker::PhantomData,
        }
    }

    /// A handle for emitting events from outside the rendered Props.
    pub fn emitter(&self) -> Emitter<Event> {
        self.emitter.clone()
    }

    /// Initialize, render the initial Props, then process events until the
    /// channel closes.
    ///
    /// The runtime keeps its own emitter, so in practice the loop runs for as
    /// long as the future is polled.
    pub async fn run(&mut self) {
        self.start();

        while let Ok(event) = self.event_receiver.recv_async().await {
            self.step(event);
        }
    }

    fn start(&mut self) {
        let (init_model, init_effect) = self.logic.init(self.model.clone());

        let initial_props = self.logic.view(&init_model, &self.emitter);
        self.renderer.render(initial_props);

        self.model = init_model;
        self.dispatch(init_effect);
    }

    fn step(&mut self, event: Event) {
        let (new_model, effect) = self.logic.update(event, &self.model);

        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        self.model = new_model;
        self.dispatch(effect);
    }

    fn dispatch(&self, effect: Effect<Event>) {
        if effect.is_none() {
            return;
        }
        self.spawner.spawn(effect.execute(&self.emitter));
    }
}

#[cfg(any(test, feature = "testing"))]
pub use testing::*;

#[cfg(any(test, feature = "testing"))]
mod testing {
    use futures::future::BoxFuture;
    use portable_atomic_util::Arc;
    use spin::Mutex;

    use super::{MvuRuntime, Spawner};
    use crate::{MvuLogic, Renderer};

    /// Executes a future synchronously on the calling thread.
    pub fn test_spawner_fn(fut: BoxFuture<'static, ()>) {
        futures::executor::block_on(fut);
    }

    /// Creates a spawner that runs each effect to completion as soon as it
    /// is spawned.
    ///
    /// Only available with the `testing` feature or during tests.
    pub fn create_test_spawner() -> fn(BoxFuture<'static, ()>) {
        test_spawner_fn
    }

    /// Spawner that parks effects until the test releases them.
    ///
    /// Only available with the `testing` feature or during tests.
    ///
    /// Useful for observing the model while an effect is still in flight:
    /// pass [`spawner`](Self::spawner) to the runtime, then call
    /// [`run_pending`](Self::run_pending) followed by
    /// [`TestMvuDriver::process_events`].
    #[derive(Clone)]
    pub struct QueuedSpawner {
        pending: Arc<Mutex<Vec<BoxFuture<'static, ()>>>>,
    }

    impl Default for QueuedSpawner {
        fn default() -> Self {
            Self::new()
        }
    }

    impl QueuedSpawner {
        pub fn new() -> Self {
            Self {
                pending: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// A spawner handle sharing this queue.
        pub fn spawner(&self) -> impl Fn(BoxFuture<'static, ()>) + 'static {
            let pending = self.pending.clone();
            move |fut| pending.lock().push(fut)
        }

        /// Number of effects waiting to run.
        pub fn pending(&self) -> usize {
            self.pending.lock().len()
        }

        /// Run every parked effect to completion, in spawn order.
        pub fn run_pending(&self) {
            let parked: Vec<_> = core::mem::take(&mut *self.pending.lock());
            for fut in parked {
                futures::executor::block_on(fut);
            }
        }
    }

    /// Test runtime driver for manual event processing control.
    ///
    /// Only available with the `testing` feature or during tests.
    ///
    /// Returned by [`TestMvuRuntime::run`].
    pub struct TestMvuDriver<Event, Model, Props, Logic, Render, Spawn>
    where
        Event: Send + 'static,
        Model: Clone + 'static,
        Props: 'static,
        Logic: MvuLogic<Event, Model, Props>,
        Render: Renderer<Props>,
        Spawn: Spawner,
    {
        runtime: MvuRuntime<Event, Model, Props, Logic, Render, Spawn>,
    }

    impl<Event, Model, Props, Logic, Render, Spawn>
        TestMvuDriver<Event, Model, Props, Logic, Render, Spawn>
    where
        Event: Send + 'static,
        Model: Clone + 'static,
        Props: 'static,
        Logic: MvuLogic<Event, Model, Props>,
        Render: Renderer<Props>,
        Spawn: Spawner,
    {
        /// Process queued events until the queue is empty, including events
        /// emitted by effects that complete during processing.
        pub fn process_events(&mut self) {
            while let Ok(event) = self.runtime.event_receiver.try_recv() {
                self.runtime.step(event);
            }
        }

        /// Emit an event directly, bypassing the Props callbacks.
        pub fn emit(&self, event: Event) {
            self.runtime.emitter.emit(event);
        }

        /// The current model.
        pub fn model(&self) -> &Model {
            &self.runtime.model
        }
    }

    /// Test runtime for MVU with manual event processing control.
    ///
    /// Only available with the `testing` feature or during tests.
    ///
    /// Unlike [`MvuRuntime`], this runtime does not process events on its own.
    /// Tests call [`process_events`](TestMvuDriver::process_events) on the
    /// returned driver to drain the queue.
    pub struct TestMvuRuntime<Event, Model, Props, Logic, Render, Spawn>
    where
        Event: Send + 'static,
        Model: Clone + 'static,
        Props: 'static,
        Logic: MvuLogic<Event, Model, Props>,
        Render: Renderer<Props>,
        Spawn: Spawner,
    {
        runtime: MvuRuntime<Event, Model, Props, Logic, Render, Spawn>,
    }

    impl<Event, Model, Props, Logic, Render, Spawn>
        TestMvuRuntime<Event, Model, Props, Logic, Render, Spawn>
    where
        Event: Send + 'static,
        Model: Clone + 'static,
        Props: 'static,
        Logic: MvuLogic<Event, Model, Props>,
        Render: Renderer<Props>,
        Spawn: Spawner,
    {
        pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
            TestMvuRuntime {
                runtime: MvuRuntime::new(init_model, logic, renderer, spawner),
            }
        }

        /// Renders the initial state and dispatches the initial effect, then
        /// returns a driver for manual event processing.
        pub fn run(mut self) -> TestMvuDriver<Event, Model, Props, Logic, Render, Spawn> {
            self.runtime.start();
            TestMvuDriver { runtime: self.runtime }
        }
    }
}
