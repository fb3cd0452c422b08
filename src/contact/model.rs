use crate::relay::RelayError;

use super::FormError;

/// One of the three inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your name",
            Field::Email => "Enter your email",
            Field::Message => "Write your message...",
        }
    }
}

/// Raw input values, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Where the form is in its lifecycle.
///
/// A single enum keeps "sent" and "sending" mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Editing,
    Sending,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactModel {
    pub fields: FormFields,
    pub status: Status,
    pub error: Option<FormError>,
}

impl ContactModel {
    pub fn is_sent(&self) -> bool {
        self.status == Status::Sent
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Sending
    }

    /// The inline error text, empty when there is none.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    /// An input's value changed.
    FieldChanged(Field, String),
    /// The submit control was pressed.
    Submitted,
    /// The relay accepted the message.
    Delivered,
    /// The relay call failed.
    DeliveryFailed(RelayError),
    /// "Send Another Message" was pressed on the success view.
    SendAnotherClicked,
}
