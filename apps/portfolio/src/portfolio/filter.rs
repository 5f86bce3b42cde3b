//! Project tag filter.
//!
//! Selection semantics are AND: a project is shown only when it carries every
//! selected tag. An empty selection means no filter. Order of the input list
//! is always preserved.

use std::collections::BTreeSet;

use crate::content::Project;

/// A subset of the tags offered by the project list. Empty = show everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection(BTreeSet<String>);

impl TagSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a selection from a comma-joined query value, keeping only tags
    /// that appear in `available`. Tags no project carries are dropped so the
    /// selection never leaves the offered set.
    pub fn from_query(raw: &str, available: &[String]) -> Self {
        let tags = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .filter(|t| available.iter().any(|a| a == t))
            .map(str::to_string)
            .collect();
        Self(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// The selection with `tag` added if absent, removed if present.
    pub fn toggled(&self, tag: &str) -> Self {
        let mut tags = self.0.clone();
        if !tags.remove(tag) {
            tags.insert(tag.to_string());
        }
        Self(tags)
    }

    /// Comma-joined form used in query strings.
    pub fn to_query_value(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Every distinct tag across `projects`, sorted.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Projects carrying every selected tag, in their original order.
/// An empty selection returns every project.
pub fn apply_filter<'a>(projects: &'a [Project], selected: &TagSelection) -> Vec<&'a Project> {
    if selected.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.has_all_tags(selected.iter()))
        .collect()
}
