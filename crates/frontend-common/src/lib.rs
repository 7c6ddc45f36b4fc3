//! Theme, scroll tracking, logging and shared components for the SoftSell site

pub mod components;
pub mod geometry;
pub mod hooks;
pub mod logging;
pub mod theme;

pub use components::{SectionHeading, Spinner, ThemeToggle};
pub use geometry::{DomSectionGeometry, scroll_to_section};
pub use hooks::{ScrollSpyHandle, use_scroll_spy};
pub use theme::{Theme, ThemeContext, ThemeProvider, use_current_theme, use_theme, use_theme_toggle};
