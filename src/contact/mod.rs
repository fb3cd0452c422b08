//! The contact form: validation, the relay call, and the success view.

mod model;
mod props;
mod submission;
mod text;

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::relay::EmailRelay;
use crate::{Effect, Emitter, MvuLogic};

pub use model::{ContactEvent, ContactModel, Field, FormFields, Status};
pub use props::{
    CardProps, ContactDetails, ContactProps, FormProps, InputProps, SentProps, SocialLink,
    DEFAULT_INTRO, DETAILS_HEADING, LINKS_HEADING, LOCATION_HEADING, SECTION_HEADING,
    SENDING_LABEL, SEND_ANOTHER_LABEL, SENT_BODY, SENT_HEADING, SUBMIT_LABEL,
};
pub use submission::{is_form_whitespace, is_valid_email, FormError, Submission};
pub use text::TextRenderer;

/// Form controller for [`MvuRuntime`](crate::MvuRuntime).
///
/// ```text
/// Editing --Submitted (valid)--> Sending --Delivered--> Sent --SendAnotherClicked--> Editing
///                                   \--DeliveryFailed--> Editing (error set, input kept)
/// ```
pub struct ContactForm {
    relay: Arc<dyn EmailRelay>,
    intro: String,
    details: ContactDetails,
}

impl ContactForm {
    pub fn new(relay: Arc<dyn EmailRelay>) -> Self {
        Self {
            relay,
            intro: DEFAULT_INTRO.to_string(),
            details: ContactDetails::default(),
        }
    }

    /// Replace the paragraph shown under the section heading.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    pub fn with_details(mut self, details: ContactDetails) -> Self {
        self.details = details;
        self
    }

    fn submit(&self, model: &ContactModel) -> (ContactModel, Effect<ContactEvent>) {
        let mut next = ContactModel { error: None, ..model.clone() };

        let submission = match Submission::parse(&model.fields) {
            Ok(submission) => submission,
            Err(e) => {
                debug!(error = %e, "contact form rejected");
                next.error = Some(e);
                return (next, Effect::none());
            }
        };

        next.status = Status::Sending;
        let relay = self.relay.clone();
        let effect = Effect::task(move |emitter: Emitter<ContactEvent>| async move {
            match relay.send(&submission).await {
                Ok(()) => emitter.emit(ContactEvent::Delivered),
                Err(e) => emitter.emit(ContactEvent::DeliveryFailed(e)),
            }
        });
        (next, effect)
    }
}

impl MvuLogic<ContactEvent, ContactModel, ContactProps> for ContactForm {
    fn init(&self, model: ContactModel) -> (ContactModel, Effect<ContactEvent>) {
        (model, Effect::none())
    }

    fn update(
        &self,
        event: ContactEvent,
        model: &ContactModel,
    ) -> (ContactModel, Effect<ContactEvent>) {
        match (event, model.status) {
            (ContactEvent::FieldChanged(field, value), Status::Editing | Status::Sending) => {
                let mut next = model.clone();
                next.fields.set(field, value);
                (next, Effect::none())
            }
            (ContactEvent::Submitted, Status::Editing) => self.submit(model),
            (ContactEvent::Delivered, Status::Sending) => {
                info!("contact message delivered");
                let next = ContactModel {
                    status: Status::Sent,
                    ..ContactModel::default()
                };
                (next, Effect::none())
            }
            (ContactEvent::DeliveryFailed(e), Status::Sending) => {
                error!(error = %e, "contact message delivery failed");
                let next = ContactModel {
                    status: Status::Editing,
                    error: Some(FormError::DeliveryFailed),
                    ..model.clone()
                };
                (next, Effect::none())
            }
            (ContactEvent::SendAnotherClicked, Status::Sent) => {
                let next = ContactModel {
                    status: Status::Editing,
                    error: None,
                    ..model.clone()
                };
                (next, Effect::none())
            }
            // Submit is disabled while sending and absent once sent.
            _ => (model.clone(), Effect::none()),
        }
    }

    fn view(&self, model: &ContactModel, emitter: &Emitter<ContactEvent>) -> ContactProps {
        ContactProps {
            heading: SECTION_HEADING,
            intro: self.intro.clone(),
            card: props::card(model, emitter),
            details: self.details.clone(),
        }
    }
}
