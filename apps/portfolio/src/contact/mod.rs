// Contact composer: turns a form submission into a pre-filled mailto link.
// Nothing is sent or stored server-side.

pub mod compose;
pub mod handlers;
pub mod shorten;

pub use compose::{compose_mailto, ContactForm, MailtoLink};
