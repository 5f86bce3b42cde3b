use std::collections::HashSet;

use crate::config::Config;
use crate::content::PortfolioContent;
use crate::resume::{resume_status, ResumeStatus};

/// Which optional files exist right now. Checked per request so dropping a
/// file into place takes effect without a restart.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAssets {
    pub profile_image: bool,
    pub resume: ResumeStatus,
    /// Thumbnail paths (relative to the assets dir) that exist on disk.
    pub thumbnails: HashSet<String>,
}

impl PageAssets {
    pub fn scan(config: &Config, content: &PortfolioContent) -> Self {
        let thumbnails = content
            .projects
            .iter()
            .filter_map(|p| p.thumbnail.as_deref())
            .filter(|rel| config.asset_path(rel).is_file())
            .map(str::to_string)
            .collect();

        Self {
            profile_image: config.profile_image_path().is_file(),
            resume: resume_status(&config.resume_path(&content.profile.resume_filename)),
            thumbnails,
        }
    }

    /// Nothing on disk.
    #[cfg(test)]
    pub fn missing() -> Self {
        Self {
            profile_image: false,
            resume: ResumeStatus::Missing,
            thumbnails: HashSet::new(),
        }
    }
}
