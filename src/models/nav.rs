/// A destination in the bottom tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub is_active: bool,
}

const TABS: [(&str, &str, &str); 5] = [
    ("Home", "/", "home"),
    ("Reports", "/reports", "bar-chart"),
    ("Survey", "/survey", "pie-chart"),
    ("Jobs", "/jobs", "briefcase"),
    ("Events", "/events", "calendar"),
];

/// Tabs for the current path. Only an exact path match is active, so
/// nested paths highlight nothing.
pub fn tabs(current_path: &str) -> Vec<NavTab> {
    TABS.iter()
        .map(|&(label, path, icon)| NavTab {
            label,
            path,
            icon,
            is_active: current_path == path,
        })
        .collect()
}
