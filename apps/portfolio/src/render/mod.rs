// Server-side HTML rendering with Dioxus components.
// Text and attribute values are escaped by the renderer.

pub mod assets;
pub mod page;
pub mod sections;
pub mod styles;

use std::sync::Arc;

use dioxus::prelude::*;

pub use assets::PageAssets;

use crate::contact::{ContactForm, MailtoLink};
use crate::content::PortfolioContent;
use crate::portfolio::ViewState;
use crate::render::page::Page;

/// Everything one render pass reads.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub content: Arc<PortfolioContent>,
    pub view: ViewState,
    pub assets: PageAssets,
    pub contact: Option<ComposedContact>,
}

/// Submitted contact form and the link composed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedContact {
    pub form: ContactForm,
    pub link: MailtoLink,
}

/// Renders the whole document for one request. Same context, same HTML.
pub fn render_page(ctx: PageContext) -> String {
    let PageContext {
        content,
        view,
        assets,
        contact,
    } = ctx;
    let document = dioxus_ssr::render_element(rsx! {
        Page {
            content: content,
            view: view,
            assets: assets,
            contact: contact,
        }
    });
    format!("<!DOCTYPE html><html lang=\"en\">{document}</html>")
}
