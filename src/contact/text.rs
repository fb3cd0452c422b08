//! Plain-text rendering of [`ContactProps`], for terminals and logs.

use std::io::{self, Write};

use crate::Renderer;

use super::{
    CardProps, ContactDetails, ContactProps, DETAILS_HEADING, LINKS_HEADING, LOCATION_HEADING,
};

/// Writes each render as a block of text to the wrapped writer.
///
/// The callbacks in the Props are dropped; drive the form through the
/// runtime's [`Emitter`](crate::Emitter) instead.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_props(&mut self, props: &ContactProps) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "# {}", props.heading)?;
        if !props.intro.is_empty() {
            writeln!(out, "{}", props.intro)?;
        }
        writeln!(out)?;

        match &props.card {
            CardProps::Form(form) => {
                for input in &form.inputs {
                    let shown = if input.value.is_empty() {
                        input.placeholder
                    } else {
                        input.value.as_str()
                    };
                    writeln!(out, "{}: {}", input.label, shown)?;
                }
                if let Some(message) = &form.error_message {
                    writeln!(out, "! {message}")?;
                }
                let state = if form.submit_disabled { " (disabled)" } else { "" };
                writeln!(out, "[{}]{}", form.submit_label, state)?;
            }
            CardProps::Sent(sent) => {
                writeln!(out, "{}", sent.heading)?;
                writeln!(out, "{}", sent.body)?;
                writeln!(out, "[{}]", sent.button_label)?;
            }
        }
        write_details(out, &props.details)?;
        writeln!(out)?;
        out.flush()
    }
}

fn write_details(out: &mut impl Write, details: &ContactDetails) -> io::Result<()> {
    if details.email.is_some() || details.phone.is_some() {
        writeln!(out, "\n## {DETAILS_HEADING}")?;
        if let Some(email) = &details.email {
            writeln!(out, "📧 {email}")?;
        }
        if let Some(phone) = &details.phone {
            writeln!(out, "📞 {phone}")?;
        }
    }
    if !details.links.is_empty() {
        writeln!(out, "\n## {LINKS_HEADING}")?;
        for link in &details.links {
            writeln!(out, "{} →: {}", link.label, link.url)?;
        }
    }
    if let Some(location) = &details.location {
        writeln!(out, "\n## {LOCATION_HEADING}")?;
        writeln!(out, "{location}")?;
    }
    Ok(())
}

impl<W: Write> Renderer<ContactProps> for TextRenderer<W> {
    fn render(&mut self, props: ContactProps) {
        if let Err(e) = self.write_props(&props) {
            tracing::warn!(error = %e, "failed to write contact form render");
        }
    }
}
