/// Listing page whose detail pages also highlight its nav item.
pub const PROJECTS_PATH: &str = "/projects";
/// Prefix shared by every project detail page.
pub const PROJECT_DETAIL_PREFIX: &str = "/project/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "SRL - Trading", path: "/about" },
    NavItem { label: "Health Care", path: PROJECTS_PATH },
    NavItem { label: "Ever Power", path: "/gallery" },
    NavItem { label: "Dbox Digital", path: "/testimonial" },
    NavItem { label: "Contact", path: "/contact" },
];

impl NavItem {
    /// Whether this item should be highlighted for `current_path`.
    ///
    /// Matching is exact, except that project detail pages count as children
    /// of the projects listing.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path
            || (self.path == PROJECTS_PATH && current_path.starts_with(PROJECT_DETAIL_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str) -> NavItem {
        NAV_ITEMS
            .iter()
            .copied()
            .find(|item| item.path == path)
            .unwrap()
    }

    #[test]
    fn test_exact_path_is_active() {
        for nav_item in NAV_ITEMS {
            assert!(nav_item.is_active(nav_item.path));
        }
    }

    #[test]
    fn test_project_detail_highlights_projects() {
        let projects = item(PROJECTS_PATH);
        assert!(projects.is_active("/project/solar-farm"));
        assert!(projects.is_active("/project/"));
        assert!(!item("/").is_active("/project/solar-farm"));
        assert!(!item("/gallery").is_active("/project/solar-farm"));
    }

    #[test]
    fn test_other_items_do_not_prefix_match() {
        assert!(!item("/gallery").is_active("/gallery/2024"));
        assert!(!item("/about").is_active("/about/team"));
        assert!(!item("/").is_active("/contact"));
    }

    #[test]
    fn test_projects_listing_needs_detail_prefix() {
        let projects = item(PROJECTS_PATH);
        assert!(!projects.is_active("/projectsx"));
        assert!(!projects.is_active("/project"));
    }

    #[test]
    fn test_exactly_one_item_active_per_known_path() {
        for path in ["/", "/about", "/projects", "/project/a", "/gallery", "/contact"] {
            let active = NAV_ITEMS.iter().filter(|i| i.is_active(path)).count();
            assert_eq!(active, 1, "path {path}");
        }
        assert_eq!(NAV_ITEMS.iter().filter(|i| i.is_active("/nowhere")).count(), 0);
    }
}
