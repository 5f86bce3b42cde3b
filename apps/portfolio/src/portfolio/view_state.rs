use serde::Deserialize;
use tracing::debug;
use url::form_urlencoded;

use crate::portfolio::filter::TagSelection;
use crate::portfolio::navigation::Section;

/// Raw query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub section: Option<String>,
    /// Comma-joined tag list.
    pub tags: Option<String>,
}

/// Per-request view state passed into the renderer.
///
/// Built fresh from the request on every render: nothing is remembered between
/// requests, so navigating away from a section discards its state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub section: Section,
    pub selection: TagSelection,
}

impl ViewState {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            selection: TagSelection::empty(),
        }
    }

    /// Resolves the query against the tags the project list actually offers.
    /// An unknown section falls back to the default.
    pub fn from_query(query: &PageQuery, available_tags: &[String]) -> Self {
        let section = match query.section.as_deref() {
            None => Section::default(),
            Some(raw) => Section::parse(raw).unwrap_or_else(|| {
                debug!("Unknown section '{raw}', falling back to default");
                Section::default()
            }),
        };

        let selection = query
            .tags
            .as_deref()
            .map(|raw| TagSelection::from_query(raw, available_tags))
            .unwrap_or_default();

        Self { section, selection }
    }

    /// Href that switches to `section`. Filter state is not carried over.
    pub fn section_href(section: Section) -> String {
        format!(
            "/?{}",
            form_urlencoded::Serializer::new(String::new())
                .append_pair("section", section.as_str())
                .finish()
        )
    }

    /// Href for the projects section with `selection` applied.
    pub fn projects_href(selection: &TagSelection) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("section", Section::Projects.as_str());
        if !selection.is_empty() {
            query.append_pair("tags", &selection.to_query_value());
        }
        format!("/?{}", query.finish())
    }
}
