use std::sync::Arc;

use futures::future::{self, Either, FutureExt};
use portfolio_contact::contact::{
    CardProps, ContactEvent, ContactForm, ContactModel, ContactProps, Field,
};
use portfolio_contact::{MvuRuntime, QueuedSpawner, Spawner, TestRenderer};

use super::MockRelay;

type ContactRuntime<S> = MvuRuntime<
    ContactEvent,
    ContactModel,
    ContactProps,
    ContactForm,
    TestRenderer<ContactProps>,
    S,
>;

/// Polls the event loop until it has drained the queue and is waiting for more.
fn run_until_idle<S: Spawner>(runtime: &mut ContactRuntime<S>) {
    let outcome = futures::executor::block_on(future::select(
        Box::pin(runtime.run()),
        future::ready(()),
    ));
    assert!(
        matches!(outcome, Either::Right(_)),
        "event loop should keep waiting while its emitter is alive"
    );
}

#[test]
fn given_events_from_the_runtime_emitter_when_run_should_process_them_in_order() {
    let mut relay = MockRelay::new();
    relay
        .expect_send()
        .withf(|s| s.name() == "Ada")
        .times(1)
        .returning(|_| future::ready(Ok(())).boxed());
    let renders = TestRenderer::new();
    let queue = QueuedSpawner::new();
    let mut runtime = MvuRuntime::new(
        ContactModel::default(),
        ContactForm::new(Arc::new(relay)),
        renders.clone(),
        queue.spawner(),
    );

    let emitter = runtime.emitter();
    emitter.emit(ContactEvent::FieldChanged(Field::Name, "Ada".into()));
    emitter.emit(ContactEvent::FieldChanged(Field::Email, "ada@example.com".into()));
    emitter.emit(ContactEvent::FieldChanged(Field::Message, "Hello".into()));
    emitter.emit(ContactEvent::Submitted);

    run_until_idle(&mut runtime);

    // Initial render plus one per event.
    assert_eq!(renders.count(), 5);
    assert_eq!(queue.pending(), 1);
    renders.with_latest(|props| match &props.card {
        CardProps::Form(form) => {
            assert!(form.submit_disabled);
            assert_eq!(form.input(Field::Name).value, "Ada");
        }
        CardProps::Sent(_) => panic!("expected the form card while sending"),
    });

    queue.run_pending();
    run_until_idle(&mut runtime);

    renders.with_latest(|props| assert!(matches!(props.card, CardProps::Sent(_))));
}
