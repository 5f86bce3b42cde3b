/// The page section currently shown in the main content region.
/// Exactly one is active per render; there is no state carried between sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Projects,
    Experience,
    Education,
    Skills,
    Contact,
}

impl Section {
    /// Display order in the side navigation.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Case-insensitive lookup by identifier.
    pub fn parse(raw: &str) -> Option<Section> {
        let raw = raw.trim();
        Section::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_about() {
        assert_eq!(Section::default(), Section::About);
    }

    #[test]
    fn test_parse_round_trips_every_section() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Section::parse(" Projects "), Some(Section::Projects));
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(Section::parse("blog"), None);
        assert_eq!(Section::parse(""), None);
    }

    #[test]
    fn test_all_sections_are_distinct() {
        let ids: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
