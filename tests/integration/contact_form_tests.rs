use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::{self, FutureExt};
use portfolio_contact::contact::{
    CardProps, Field, FormFields, Status, DEFAULT_INTRO, SECTION_HEADING, SENT_BODY, SENT_HEADING,
    SUBMIT_LABEL,
};
use portfolio_contact::RelayError;

use super::{build_contact_test, MockRelay};

fn relay_never_called() -> MockRelay {
    let mut relay = MockRelay::new();
    relay.expect_send().never();
    relay
}

#[test]
fn given_a_fresh_form_should_render_empty_enabled_form() {
    let test = build_contact_test(relay_never_called());

    assert_eq!(test.renders.count(), 1);
    test.renders.with_latest(|props| {
        assert_eq!(props.heading, SECTION_HEADING);
        assert_eq!(props.intro, DEFAULT_INTRO);
    });
    test.with_form(|form| {
        for field in Field::ALL {
            assert_eq!(form.input(field).value, "");
            assert_eq!(form.input(field).label, field.label());
        }
        assert_eq!(form.error_message, None);
        assert_eq!(form.submit_label, SUBMIT_LABEL);
        assert!(!form.submit_disabled);
    });
}

#[test]
fn given_an_empty_field_when_submitted_should_ask_to_fill_all_fields_without_calling_relay() {
    let cases = [
        ("", "ada@example.com", "Hello"),
        ("Ada", "", "Hello"),
        ("Ada", "ada@example.com", ""),
        ("   ", "ada@example.com", "Hello"),
    ];

    for (name, email, message) in cases {
        let mut test = build_contact_test(relay_never_called());
        test.fill(name, email, message);
        test.submit();

        assert!(!test.model().is_sent());
        assert!(!test.model().is_loading());
        test.with_form(|form| {
            assert_eq!(form.error_message.as_deref(), Some("Please fill in all fields."));
        });
    }
}

#[test]
fn given_a_malformed_email_when_submitted_should_ask_for_valid_email_without_calling_relay() {
    let mut test = build_contact_test(relay_never_called());

    test.fill("Ada", "not-an-email", "Hello");
    test.submit();

    assert_eq!(test.model().status, Status::Editing);
    test.with_form(|form| {
        assert_eq!(form.error_message.as_deref(), Some("Please enter a valid email address."));
        assert_eq!(form.input(Field::Email).value, "not-an-email");
    });
}

#[test]
fn given_valid_values_when_submitted_should_call_relay_once_and_show_success() {
    let mut relay = MockRelay::new();
    relay
        .expect_send()
        .withf(|s| {
            s.name() == "Ada" && s.email() == "ada@example.com" && s.message() == "Hello there"
        })
        .times(1)
        .returning(|_| future::ready(Ok(())).boxed());
    let mut test = build_contact_test(relay);

    test.fill("  Ada ", "ada@example.com ", "Hello there\n");
    test.submit();

    assert!(test.model().is_sent());
    assert!(!test.model().is_loading());
    assert_eq!(test.model().fields, FormFields::default());
    assert_eq!(test.model().error_message(), "");
    test.with_sent(|sent| {
        assert_eq!(sent.heading, SENT_HEADING);
        assert_eq!(sent.body, "Thanks for reaching out — I’ll get back to you shortly.");
        assert_eq!(sent.body, SENT_BODY);
    });

    // Sending render sits between the submit and the confirmation.
    test.renders.with_renders(|renders| {
        let sending = &renders[renders.len() - 2];
        match &sending.card {
            CardProps::Form(form) => assert!(form.submit_disabled),
            CardProps::Sent(_) => panic!("expected a sending form render"),
        }
    });
}

#[test]
fn given_relay_failure_when_submitted_should_show_error_and_keep_input() {
    let mut relay = MockRelay::new();
    relay
        .expect_send()
        .times(1)
        .returning(|_| {
            future::ready(Err(RelayError::Request("connection refused".into()))).boxed()
        });
    let mut test = build_contact_test(relay);

    test.fill("Ada", "ada@example.com", "Hello");
    test.submit();

    assert!(!test.model().is_sent());
    assert!(!test.model().is_loading());
    test.with_form(|form| {
        assert_eq!(
            form.error_message.as_deref(),
            Some("Failed to send message. Please try again later.")
        );
        assert!(!form.submit_disabled);
        assert_eq!(form.input(Field::Name).value, "Ada");
        assert_eq!(form.input(Field::Email).value, "ada@example.com");
        assert_eq!(form.input(Field::Message).value, "Hello");
    });
}

#[test]
fn given_relay_failure_when_resubmitted_should_retry_and_succeed() {
    let calls = AtomicUsize::new(0);
    let mut relay = MockRelay::new();
    relay.expect_send().times(2).returning(move |_| {
        let result = match calls.fetch_add(1, Ordering::SeqCst) {
            0 => Err(RelayError::Rejected { status: 503, body: "busy".into() }),
            _ => Ok(()),
        };
        future::ready(result).boxed()
    });
    let mut test = build_contact_test(relay);

    test.fill("Ada", "ada@example.com", "Hello");
    test.submit();
    assert!(!test.model().is_sent());

    test.submit();
    assert!(test.model().is_sent());
    assert_eq!(test.model().error, None);
}

#[test]
fn given_success_view_when_send_another_clicked_should_return_to_empty_form() {
    let mut relay = MockRelay::new();
    relay.expect_send().times(1).returning(|_| future::ready(Ok(())).boxed());
    let mut test = build_contact_test(relay);

    test.fill("Ada", "ada@example.com", "Hello");
    test.submit();
    test.send_another();

    assert!(!test.model().is_sent());
    assert_eq!(test.model().error_message(), "");
    test.with_form(|form| {
        assert_eq!(form.error_message, None);
        assert_eq!(form.input(Field::Name).value, "");
        assert!(!form.submit_disabled);
    });
}
