// Static portfolio content: profile, projects, experience, education, skills.
// Deserialized from a JSON data file so content edits never touch rendering code.

pub mod loader;
pub mod models;

pub use loader::load_content;
pub use models::{Education, Experience, PortfolioContent, Profile, Project, SkillGroup};
