// Page view state: which section is shown and which project tags are selected.

pub mod filter;
pub mod handlers;
pub mod navigation;
pub mod view_state;

pub use filter::{all_tags, apply_filter, TagSelection};
pub use navigation::Section;
pub use view_state::{PageQuery, ViewState};
