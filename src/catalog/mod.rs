pub mod controls;
pub mod templates;

pub use controls::{find_quick_control, quick_controls, QuickControl};
pub use templates::{find_template, list_templates};
