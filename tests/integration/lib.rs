use std::sync::Arc;

use futures::future::BoxFuture;
use mockall::mock;
use portfolio_contact::contact::{
    CardProps, ContactEvent, ContactForm, ContactModel, ContactProps, Field, FormProps, SentProps,
    Submission,
};
use portfolio_contact::{
    create_test_spawner, EmailRelay, QueuedSpawner, RelayError, Spawner, TestMvuDriver,
    TestMvuRuntime, TestRenderer,
};

mod contact_form_tests;
mod runtime_loop_tests;

mock! {
    pub Relay {}

    impl EmailRelay for Relay {
        fn send(&self, submission: &Submission) -> BoxFuture<'static, Result<(), RelayError>>;
    }
}

pub(crate) type ContactDriver<S> = TestMvuDriver<
    ContactEvent,
    ContactModel,
    ContactProps,
    ContactForm,
    TestRenderer<ContactProps>,
    S,
>;

pub(crate) struct ContactTest<S: Spawner> {
    pub(crate) driver: ContactDriver<S>,
    pub(crate) renders: TestRenderer<ContactProps>,
}

/// Effects run to completion as soon as they are dispatched.
pub(crate) fn build_contact_test(relay: MockRelay) -> ContactTest<fn(BoxFuture<'static, ()>)> {
    build(relay, create_test_spawner())
}

/// Effects stay parked in the returned spawner until released.
pub(crate) fn build_queued_contact_test(
    relay: MockRelay,
) -> (ContactTest<impl Fn(BoxFuture<'static, ()>)>, QueuedSpawner) {
    let queue = QueuedSpawner::new();
    (build(relay, queue.spawner()), queue)
}

fn build<S: Spawner>(relay: MockRelay, spawner: S) -> ContactTest<S> {
    let renders = TestRenderer::new();
    let logic = ContactForm::new(Arc::new(relay));

    let runtime = TestMvuRuntime::new(ContactModel::default(), logic, renders.clone(), spawner);
    let driver = runtime.run();

    ContactTest { driver, renders }
}

impl<S: Spawner> ContactTest<S> {
    pub(crate) fn type_into(&mut self, field: Field, value: &str) {
        self.with_form(|form| (form.input(field).on_input)(value.to_string()));
        self.driver.process_events();
    }

    pub(crate) fn fill(&mut self, name: &str, email: &str, message: &str) {
        self.type_into(Field::Name, name);
        self.type_into(Field::Email, email);
        self.type_into(Field::Message, message);
    }

    pub(crate) fn submit(&mut self) {
        self.with_form(|form| (form.on_submit)());
        self.driver.process_events();
    }

    pub(crate) fn send_another(&mut self) {
        self.with_sent(|sent| (sent.on_send_another)());
        self.driver.process_events();
    }

    pub(crate) fn model(&self) -> &ContactModel {
        self.driver.model()
    }

    pub(crate) fn with_form<R>(&self, f: impl FnOnce(&FormProps) -> R) -> R {
        self.renders.with_latest(|props| match &props.card {
            CardProps::Form(form) => f(form),
            CardProps::Sent(_) => panic!("expected the form card, found the success card"),
        })
    }

    pub(crate) fn with_sent<R>(&self, f: impl FnOnce(&SentProps) -> R) -> R {
        self.renders.with_latest(|props| match &props.card {
            CardProps::Sent(sent) => f(sent),
            CardProps::Form(_) => panic!("expected the success card, found the form card"),
        })
    }
}
