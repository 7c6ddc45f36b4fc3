mod section_heading;
mod spinner;
mod theme_toggle;

pub use section_heading::SectionHeading;
pub use spinner::Spinner;
pub use theme_toggle::ThemeToggle;
