//! Renderable output of the contact form.

use crate::Emitter;

use super::{ContactEvent, ContactModel, Field, Status};

pub const SECTION_HEADING: &str = "Get in Touch";
pub const DEFAULT_INTRO: &str = "Whether you have a project idea, want to collaborate, \
     or just want to say hello — feel free to reach out. \
     I usually respond within a few hours.";
pub const DETAILS_HEADING: &str = "Contact Details";
pub const LINKS_HEADING: &str = "Social Links";
pub const LOCATION_HEADING: &str = "Location";

pub const SUBMIT_LABEL: &str = "Send Message →";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_HEADING: &str = "Message Sent Successfully! 🎉";
pub const SENT_BODY: &str = "Thanks for reaching out — I’ll get back to you shortly.";
pub const SEND_ANOTHER_LABEL: &str = "Send Another Message";

pub type Callback = Box<dyn Fn() + Send>;
pub type InputCallback = Box<dyn Fn(String) + Send>;

pub struct ContactProps {
    pub heading: &'static str,
    pub intro: String,
    pub card: CardProps,
    pub details: ContactDetails,
}

/// The left-hand card: either the form or the confirmation.
pub enum CardProps {
    Form(FormProps),
    Sent(SentProps),
}

pub struct InputProps {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub on_input: InputCallback,
}

pub struct FormProps {
    pub inputs: Vec<InputProps>,
    pub error_message: Option<String>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub on_submit: Callback,
}

impl FormProps {
    /// Inputs are laid out in [`Field::ALL`] order.
    pub fn input(&self, field: Field) -> &InputProps {
        match field {
            Field::Name => &self.inputs[0],
            Field::Email => &self.inputs[1],
            Field::Message => &self.inputs[2],
        }
    }
}

pub struct SentProps {
    pub heading: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
    pub on_send_another: Callback,
}

/// Static contact information shown next to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<SocialLink>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl ContactDetails {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

pub(crate) fn card(model: &ContactModel, emitter: &Emitter<ContactEvent>) -> CardProps {
    if model.status == Status::Sent {
        let emitter = emitter.clone();
        return CardProps::Sent(SentProps {
            heading: SENT_HEADING,
            body: SENT_BODY,
            button_label: SEND_ANOTHER_LABEL,
            on_send_another: Box::new(move || emitter.emit(ContactEvent::SendAnotherClicked)),
        });
    }

    let inputs = Field::ALL
        .iter()
        .map(|&field| {
            let emitter = emitter.clone();
            InputProps {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                value: model.fields.get(field).to_string(),
                on_input: Box::new(move |value| {
                    emitter.emit(ContactEvent::FieldChanged(field, value))
                }),
            }
        })
        .collect();

    let loading = model.is_loading();
    let emitter = emitter.clone();
    CardProps::Form(FormProps {
        inputs,
        error_message: model.error.map(|e| e.to_string()),
        submit_label: if loading { SENDING_LABEL } else { SUBMIT_LABEL },
        submit_disabled: loading,
        on_submit: Box::new(move || emitter.emit(ContactEvent::Submitted)),
    })
}
