use crate::db::models::{CommandProfile, Method};

/// A fixed button of the remote's main screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickControl {
    pub group: &'static str,
    pub key: &'static str,
    pub label: &'static str,
    pub endpoint: &'static str,
    pub success_message: &'static str,
}

impl QuickControl {
    /// Transient profile for dispatching this control.
    pub fn to_profile(&self) -> CommandProfile {
        CommandProfile::new(self.label, self.endpoint, Method::Get)
            .with_success_message(self.success_message)
            .with_category(self.group)
    }
}

const fn control(
    group: &'static str,
    key: &'static str,
    label: &'static str,
    endpoint: &'static str,
    success_message: &'static str,
) -> QuickControl {
    QuickControl {
        group,
        key,
        label,
        endpoint,
        success_message,
    }
}

static CONTROLS: &[QuickControl] = &[
    control("volume", "volume_up", "Volume +", "/api/volume/up", "Volume raised"),
    control("volume", "volume_down", "Volume -", "/api/volume/down", "Volume lowered"),
    control("volume", "mute", "Mute", "/api/volume/mute", "Mute toggled"),
    control("media", "play", "Play/Pause", "/api/media/play", "Play/pause"),
    control("media", "stop", "Stop", "/api/media/stop", "Media stopped"),
    control("media", "next", "Next", "/api/media/next", "Next track"),
    control("media", "previous", "Previous", "/api/media/previous", "Previous track"),
    control("brightness", "brightness_up", "Brightness +", "/api/brightness/up", "Brightness raised"),
    control("brightness", "brightness_down", "Brightness -", "/api/brightness/down", "Brightness lowered"),
    control("window", "minimize", "Minimize", "/api/window/minimize", "Window minimized"),
    control("window", "maximize", "Maximize", "/api/window/maximize", "Window maximized"),
    control("window", "restore", "Restore", "/api/window/restore", "Window restored"),
    control("window", "close", "Close window", "/api/window/close", "Window closed"),
    control("hotkey", "alt_tab", "Alt+Tab", "/api/hotkey/alt_tab", "Alt+Tab"),
    control("hotkey", "win_d", "Win+D", "/api/hotkey/win_d", "Desktop shown"),
    control("hotkey", "ctrl_c", "Ctrl+C", "/api/hotkey/ctrl_c", "Copied"),
    control("hotkey", "ctrl_v", "Ctrl+V", "/api/hotkey/ctrl_v", "Pasted"),
    control("system", "lock", "Lock screen", "/api/system/lock", "Screen locked"),
    control("system", "info", "System info", "/api/system/info", "System info requested"),
    control("system", "sleep", "Sleep", "/api/system/sleep", "System going to sleep"),
    control("apps", "processes", "List processes", "/api/app/processes", "Process list requested"),
];

pub fn quick_controls() -> &'static [QuickControl] {
    CONTROLS
}

pub fn find_quick_control(key: &str) -> Option<&'static QuickControl> {
    CONTROLS.iter().find(|c| c.key == key)
}
