use std::collections::HashSet;

use dioxus::prelude::*;

use crate::contact::{ContactForm, MailtoLink};
use crate::content::{Education, Experience, Project, SkillGroup};
use crate::portfolio::{all_tags, apply_filter, TagSelection, ViewState};
use crate::render::ComposedContact;

#[component]
pub fn AboutSection(about: String) -> Element {
    rsx! {
        p { "{about}" }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

/// Tag filter, match count and the cards that carry every selected tag.
#[component]
pub fn ProjectsSection(
    projects: Vec<Project>,
    selection: TagSelection,
    thumbnails: HashSet<String>,
) -> Element {
    let total = projects.len();
    let shown: Vec<(Project, bool)> = apply_filter(&projects, &selection)
        .into_iter()
        .map(|project| {
            let has_thumbnail = project
                .thumbnail
                .as_ref()
                .is_some_and(|rel| thumbnails.contains(rel));
            (project.clone(), has_thumbnail)
        })
        .collect();
    let count = shown.len();

    // Each pill links to the current selection with that tag toggled.
    let pills: Vec<(String, &'static str, String)> = all_tags(&projects)
        .into_iter()
        .map(|tag| {
            let class = if selection.contains(&tag) { "pill active" } else { "pill" };
            let href = ViewState::projects_href(&selection.toggled(&tag));
            (tag, class, href)
        })
        .collect();
    let has_pills = !pills.is_empty();
    let clear_href = ViewState::projects_href(&TagSelection::empty());

    rsx! {
        if has_pills {
            div { class: "tag-filter",
                span { class: "muted", "Filter by tags: " }
                for (tag, class, href) in pills {
                    a { class: class, href: href, "{tag}" }
                }
            }
        }
        if !selection.is_empty() {
            p { class: "muted",
                "Showing {count} of {total} projects · "
                a { href: clear_href, "Clear filter" }
            }
        }
        if shown.is_empty() {
            p { class: "soft", "No projects carry all of the selected tags." }
        } else {
            div { class: "card-grid",
                for (project, has_thumbnail) in shown {
                    ProjectCard { project: project, has_thumbnail: has_thumbnail }
                }
            }
        }
    }
}

#[component]
pub fn ProjectCard(project: Project, has_thumbnail: bool) -> Element {
    let thumbnail = project
        .thumbnail
        .as_deref()
        .filter(|_| has_thumbnail)
        .map(|rel| format!("/assets/{rel}"));
    let links: Vec<(String, String)> = project
        .visible_links()
        .map(|(label, url)| (label.to_string(), url.to_string()))
        .collect();
    let Project {
        title,
        period,
        summary,
        highlights,
        tags,
        ..
    } = project;

    rsx! {
        div { class: "card",
            {thumbnail.map(|src| rsx! {
                img { src: src, alt: title.clone() }
            })}
            h3 { "{title}" }
            div { class: "muted", "{period}" }
            p { "{summary}" }
            BulletList { items: highlights }
            div {
                for tag in tags {
                    span { class: "pill", "{tag}" }
                }
            }
            div {
                for (label, url) in links {
                    a { class: "chip", href: url, target: "_blank", rel: "noopener", "{label}" }
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / Education / Skills
// ────────────────────────────────────────────────────────────────────────────

#[component]
pub fn ExperienceSection(entries: Vec<Experience>) -> Element {
    rsx! {
        div { class: "card-grid",
            for entry in entries {
                ExperienceCard { entry: entry }
            }
        }
    }
}

#[component]
pub fn ExperienceCard(entry: Experience) -> Element {
    let place = match entry.location.as_deref() {
        Some(loc) if !loc.trim().is_empty() => format!("{} · {loc}", entry.period),
        _ => entry.period.clone(),
    };
    let Experience {
        organization,
        role,
        highlights,
        ..
    } = entry;

    rsx! {
        div { class: "card",
            h3 { "{role} — {organization}" }
            div { class: "muted", "{place}" }
            BulletList { items: highlights }
        }
    }
}

#[component]
pub fn EducationSection(entries: Vec<Education>) -> Element {
    rsx! {
        div { class: "card-grid",
            for entry in entries {
                EducationCard { entry: entry }
            }
        }
    }
}

#[component]
pub fn EducationCard(entry: Education) -> Element {
    let Education {
        institution,
        degree,
        period,
        details,
    } = entry;

    rsx! {
        div { class: "card",
            h3 { "{degree}" }
            div { "{institution}" }
            div { class: "muted", "{period}" }
            BulletList { items: details }
        }
    }
}

#[component]
pub fn SkillsSection(groups: Vec<SkillGroup>) -> Element {
    rsx! {
        for group in groups {
            SkillGroupBlock { group: group }
        }
    }
}

#[component]
pub fn SkillGroupBlock(group: SkillGroup) -> Element {
    let SkillGroup { category, items } = group;

    rsx! {
        div { class: "skill-group",
            h3 { "{category}" }
            div {
                for item in items {
                    span { class: "chip", "{item}" }
                }
            }
        }
    }
}

/// `<ul>` of the items, nothing when there are none.
#[component]
pub fn BulletList(items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul {
            for item in items {
                li { "{item}" }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

/// Direct address, the compose form (pre-filled after a post) and the
/// composed link when there is one.
#[component]
pub fn ContactSection(
    email: String,
    #[props(!optional)] composed: Option<ComposedContact>,
) -> Element {
    let mailto = format!("mailto:{email}");
    let ContactForm {
        name,
        email: sender,
        message,
    } = composed
        .as_ref()
        .map(|c| c.form.clone())
        .unwrap_or_default();

    rsx! {
        p {
            "Reach me directly at "
            a { href: mailto, "{email}" }
            ", or leave a note below and your email app will open with it pre-filled."
        }
        form { class: "contact", method: "post", action: "/contact",
            label { "for": "name", "Name" }
            input { id: "name", name: "name", r#type: "text", value: name }
            label { "for": "email", "Email" }
            input { id: "email", name: "email", r#type: "text", value: sender }
            label { "for": "message", "Message" }
            textarea { id: "message", name: "message", rows: "8", "{message}" }
            button { class: "download", r#type: "submit", "Compose email" }
        }
        {composed.map(|composed| rsx! {
            ComposedLink { composed: composed }
        })}
    }
}

#[component]
pub fn ComposedLink(composed: ComposedContact) -> Element {
    let ComposedContact { form, link } = composed;
    let reply_to = form.email;
    let has_reply_to = !reply_to.trim().is_empty();
    let MailtoLink {
        subject, body, uri, ..
    } = link;

    rsx! {
        div { class: "soft composed",
            div {
                strong { "Subject:" }
                " {subject}"
            }
            if has_reply_to {
                div { class: "muted", "Reply to: {reply_to}" }
            }
            pre { "{body}" }
            a { class: "download", href: uri, "Open in your email app" }
        }
    }
}
