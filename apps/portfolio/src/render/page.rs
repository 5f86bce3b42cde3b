use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::PROFILE_IMAGE;
use crate::content::{PortfolioContent, Profile};
use crate::portfolio::{Section, ViewState};
use crate::render::sections::{
    AboutSection, ContactSection, EducationSection, ExperienceSection, ProjectsSection,
    SkillsSection,
};
use crate::render::styles::STYLESHEET;
use crate::render::{ComposedContact, PageAssets};
use crate::resume::ResumeStatus;

/// The whole document: side navigation, profile header, resume control, the
/// active section and the footer.
#[component]
pub fn Page(
    content: Arc<PortfolioContent>,
    view: ViewState,
    assets: PageAssets,
    #[props(!optional)] contact: Option<ComposedContact>,
) -> Element {
    let profile = content.profile.clone();
    let active = view.section;
    let id = active.as_str();
    let label = active.label();
    let title = format!("{} — Portfolio", profile.name);

    let body = match active {
        Section::About => rsx! {
            AboutSection { about: profile.about.clone() }
        },
        Section::Projects => rsx! {
            ProjectsSection {
                projects: content.projects.clone(),
                selection: view.selection.clone(),
                thumbnails: assets.thumbnails.clone(),
            }
        },
        Section::Experience => rsx! {
            ExperienceSection { entries: content.experience.clone() }
        },
        Section::Education => rsx! {
            EducationSection { entries: content.education.clone() }
        },
        Section::Skills => rsx! {
            SkillsSection { groups: content.skills.clone() }
        },
        Section::Contact => rsx! {
            ContactSection { email: profile.email.clone(), composed: contact.clone() }
        },
    };

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            style { dangerous_inner_html: STYLESHEET }
        }
        body {
            div { class: "layout",
                Nav { active: active }
                main { class: "content",
                    Header { profile: profile.clone(), has_image: assets.profile_image }
                    ResumeBlock {
                        filename: profile.resume_filename.clone(),
                        status: assets.resume,
                    }
                    section { id: "section-{id}", class: "section",
                        h2 { class: "section-title", "{label}" }
                        {body}
                    }
                    Footer { profile: profile.clone() }
                }
            }
        }
    }
}

#[component]
pub fn Nav(active: Section) -> Element {
    rsx! {
        nav { class: "sidebar",
            for section in Section::ALL {
                a {
                    class: if section == active { "nav-link active" } else { "nav-link" },
                    href: ViewState::section_href(section),
                    {section.label()}
                }
            }
        }
    }
}

#[component]
pub fn Header(profile: Profile, has_image: bool) -> Element {
    let image_src = format!("/assets/{PROFILE_IMAGE}");
    let placeholder = format!("Add {PROFILE_IMAGE}");
    let links = external_links(&profile);
    let Profile {
        name,
        title,
        location,
        email,
        phone,
        ..
    } = profile;
    let mailto = format!("mailto:{email}");
    let has_phone = !phone.trim().is_empty();

    rsx! {
        header { class: "header",
            if has_image {
                img { class: "profile-img", src: image_src, alt: name.clone() }
            } else {
                div { class: "profile-placeholder", "{placeholder}" }
            }
            div {
                div { class: "app-title",
                    h1 { "{name}" }
                }
                div { class: "app-subtitle", "{title} · {location}" }
                div {
                    "📧 "
                    a { href: mailto, "{email}" }
                    if has_phone {
                        "  ·  📞 {phone}"
                    }
                    for (icon, label, url) in links {
                        "  ·  {icon} "
                        a { href: url, target: "_blank", rel: "noopener", "{label}" }
                    }
                }
            }
        }
        hr {}
    }
}

/// Download control when the resume is on disk, a notice otherwise.
#[component]
pub fn ResumeBlock(filename: String, status: ResumeStatus) -> Element {
    match status {
        ResumeStatus::Available { .. } => rsx! {
            div { class: "resume",
                a { class: "download", href: "/resume", "download": filename.clone(),
                    "⬇️ Download my resume (PDF)"
                }
                " "
                span { class: "download-note",
                    "Replace "
                    code { "{filename}" }
                    " in the resume folder to update."
                }
            }
        },
        ResumeStatus::Missing => rsx! {
            div { class: "resume info",
                "Add {filename} to the resume folder to enable the download button."
            }
        },
    }
}

#[component]
pub fn Footer(profile: Profile) -> Element {
    let links = external_links(&profile);
    let name = profile.name;

    rsx! {
        footer { class: "footer-text",
            "© {name}"
            for (_, label, url) in links {
                " · "
                a { href: url, "{label}" }
            }
        }
    }
}

/// Profile links that are set, as (icon, label, url).
fn external_links(profile: &Profile) -> Vec<(&'static str, &'static str, String)> {
    [
        ("🔗", "LinkedIn", &profile.linkedin),
        ("💻", "GitHub", &profile.github),
    ]
    .into_iter()
    .filter(|(_, _, url)| !url.trim().is_empty())
    .map(|(icon, label, url)| (icon, label, url.clone()))
    .collect()
}
