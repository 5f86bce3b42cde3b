use axum::{extract::State, response::Html, Form, Json};
use tracing::info;

use crate::contact::{compose_mailto, ContactForm, MailtoLink};
use crate::portfolio::{Section, ViewState};
use crate::render::{render_page, ComposedContact, PageAssets, PageContext};
use crate::state::AppState;

/// POST /contact
///
/// Form post from the Contact section. Re-renders the page on the Contact
/// section with the composed mailto link.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let link = compose_mailto(&state.content.profile.email, &form);
    info!(
        "Composed contact link ({} chars of message)",
        link.body.chars().count()
    );

    let assets = PageAssets::scan(&state.config, &state.content);
    let view = ViewState::new(Section::Contact);
    let page = render_page(PageContext {
        content: state.content.clone(),
        view,
        assets,
        contact: Some(ComposedContact { form, link }),
    });
    Html(page)
}

/// POST /api/v1/contact
pub async fn handle_compose_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Json<MailtoLink> {
    Json(compose_mailto(&state.content.profile.email, &form))
}
