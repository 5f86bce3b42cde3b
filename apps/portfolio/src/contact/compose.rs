use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::contact::shorten::shorten;

/// Longest message body carried in the mailto link, in characters.
pub const MESSAGE_LIMIT: usize = 1500;
/// Stands in for the sender's name when the form leaves it blank.
pub const ANONYMOUS_SENDER: &str = "Anonymous";

/// Contact form submission. No field is validated; any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A pre-filled compose link. Sending is left to the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub uri: String,
}

pub fn compose_subject(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { ANONYMOUS_SENDER } else { name };
    format!("Portfolio contact from {name}")
}

/// Builds the mailto link for a submission addressed to `recipient`.
/// Over-long messages are shortened at a word boundary rather than rejected.
pub fn compose_mailto(recipient: &str, form: &ContactForm) -> MailtoLink {
    let subject = compose_subject(&form.name);
    let body = shorten(&form.message, MESSAGE_LIMIT);
    let uri = format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(&subject),
        encode_component(&body)
    );

    MailtoLink {
        recipient: recipient.to_string(),
        subject,
        body,
        uri,
    }
}

/// Percent-encodes a mailto header value. Spaces become `%20`, since mail
/// clients do not read `+` as a space outside form bodies.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
