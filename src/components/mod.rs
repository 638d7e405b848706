//! UI Components
//!
//! Leptos components for the dashboard view tree.

pub mod banner;
pub mod header;
pub mod main_content;
pub mod right_panel;
pub mod search;
pub mod section;
pub mod sidebar;

pub use banner::Banner;
pub use header::Header;
pub use main_content::MainContent;
pub use right_panel::RightPanels;
pub use search::SearchFilters;
pub use section::Section;
pub use sidebar::Sidebar;
