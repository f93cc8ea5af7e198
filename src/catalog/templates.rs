use once_cell::sync::Lazy;

use crate::db::models::{CommandProfile, Method};

static TEMPLATES: Lazy<Vec<CommandProfile>> = Lazy::new(|| {
    vec![
        template("notepad", "Launch Notepad", "/api/app/launch", "Applications")
            .with_parameter("path", r"C:\Windows\System32\notepad.exe")
            .with_success_message("Notepad launched"),
        template("calculator", "Launch Calculator", "/api/app/launch", "Applications")
            .with_parameter("path", r"C:\Windows\System32\calc.exe")
            .with_success_message("Calculator launched"),
        template("chrome", "Launch Chrome", "/api/app/launch", "Applications")
            .with_parameter("path", "chrome.exe")
            .with_success_message("Chrome launched"),
        template("volume_up_5", "Volume +5", "/api/volume/up", "Volume")
            .with_parameter("steps", "5")
            .with_success_message("Volume raised by 5 steps"),
        template("brightness_up_10", "Brightness +10", "/api/brightness/up", "Brightness")
            .with_parameter("steps", "10")
            .with_success_message("Brightness raised by 10 steps"),
        template("shutdown_force", "Force shutdown", "/api/system/shutdown", "System")
            .with_parameter("force", "true")
            .with_success_message("System will shut down")
            .dangerous(),
    ]
});

fn template(id: &str, name: &str, endpoint: &str, category: &str) -> CommandProfile {
    let mut profile = CommandProfile::new(name, endpoint, Method::Post).with_category(category);
    profile.id = id.to_string();
    profile
}

/// Read-only starting points for new profiles.
///
/// Template ids only identify the template; call
/// [`CommandProfile::as_new_copy`] before storing one.
pub fn list_templates() -> &'static [CommandProfile] {
    &TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static CommandProfile> {
    TEMPLATES.iter().find(|t| t.id == id)
}
