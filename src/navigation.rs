//! Sidebar navigation descriptors for the dashboard shell.

use crate::models::{SidebarItem, SidebarSection};
use crate::redirect::DASHBOARD_ROOT;

/// The sidebar sections rendered on every dashboard page.
pub fn default_sections() -> Vec<SidebarSection> {
    vec![
        SidebarSection {
            heading: Some("Study".to_string()),
            items: vec![
                item("Flashcards", "flashcards", "cards"),
                item("Quizzes", "quizzes", "check-square"),
            ],
        },
        SidebarSection {
            heading: Some("Collaborate".to_string()),
            items: vec![item("Study Groups", "groups", "users")],
        },
        SidebarSection {
            heading: None,
            items: vec![item("Tasks", "tasks", "list-todo")],
        },
    ]
}

fn item(title: &str, view: &str, icon: &str) -> SidebarItem {
    SidebarItem {
        title: title.to_string(),
        href: format!("{}/{}", DASHBOARD_ROOT, view),
        icon: icon.to_string(),
        badge: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_hrefs_are_dashboard_sub_pages() {
        for section in default_sections() {
            for item in section.items {
                assert!(item.href.starts_with("/dashboard/"), "href {}", item.href);
                assert_ne!(item.href, DASHBOARD_ROOT);
            }
        }
    }

    #[test]
    fn test_every_dashboard_view_has_a_sidebar_item() {
        let hrefs: Vec<String> = default_sections()
            .into_iter()
            .flat_map(|s| s.items)
            .map(|i| i.href)
            .collect();

        for view in crate::config::DASHBOARD_VIEWS {
            assert!(hrefs.iter().any(|h| h == &format!("/dashboard/{}", view)));
        }
    }
}
