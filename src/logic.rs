//! Application logic trait defining the MVU contract.

use crate::{Effect, Emitter};

/// Application logic trait defining the MVU contract.
///
/// Implementations provide three functions:
/// - [`init`](Self::init): initialize the model and produce initial effects
/// - [`update`](Self::update): transform (Event, Model) into (Model, Effect)
/// - [`view`](Self::view): derive Props from the Model, wiring callbacks through the emitter
///
/// [`ContactForm`](crate::contact::ContactForm) is the implementation shipped
/// with this crate.
pub trait MvuLogic<Event: Send, Model, Props> {
    /// Called once when the runtime starts.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Reduce an event to an updated model and side effects.
    ///
    /// All state changes go through this function. It must not perform I/O
    /// itself; anything asynchronous is described by the returned [`Effect`].
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Reduce the current model to Props ready for
    /// [`Renderer::render`](crate::Renderer::render).
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}
