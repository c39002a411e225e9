/// A landing-page shortcut card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    pub tone: &'static str,
}

pub const CARDS: [DashboardCard; 4] = [
    DashboardCard { title: "Financial Reports", icon: "bar-chart", link: "/reports", tone: "blue" },
    DashboardCard { title: "Survey Insights", icon: "pie-chart", link: "/survey", tone: "green" },
    DashboardCard { title: "Jobs & Opportunities", icon: "briefcase", link: "/jobs", tone: "purple" },
    DashboardCard { title: "Announcements & Events", icon: "calendar", link: "/events", tone: "red" },
];
