//! Root redirect guard for the dashboard shell.
//!
//! The guard is a pure function over the observed path and the configured
//! default view, so it can be tested without a live router. The HTTP wiring
//! lives in `pages.rs`.

use crate::log_redirect;

/// Base path under which all dashboard sub-pages are nested.
pub const DASHBOARD_ROOT: &str = "/dashboard";

/// Decide whether a visit to `path` should be redirected.
///
/// Returns `Some(target)` only when the path is exactly the dashboard root
/// (a trailing slash counts as the root). The target is guaranteed to not
/// re-trigger the guard: a default view that would resolve back to the root
/// yields no redirect at all.
pub fn root_redirect(path: &str, default_view: &str) -> Option<String> {
    let normalized = path.strip_suffix('/').unwrap_or(path);
    if normalized != DASHBOARD_ROOT {
        log_redirect!(skipped, path);
        return None;
    }

    let view = default_view.trim_matches('/');
    if view.is_empty() {
        // Redirecting to the root itself would loop forever.
        log_redirect!(skipped, path);
        return None;
    }

    let target = format!("{}/{}", DASHBOARD_ROOT, view);
    debug_assert!(root_redirect_target_is_terminal(&target));
    log_redirect!(issued, path, target);
    Some(target)
}

fn root_redirect_target_is_terminal(target: &str) -> bool {
    let normalized = target.strip_suffix('/').unwrap_or(target);
    normalized != DASHBOARD_ROOT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_pages_never_redirect() {
        for path in [
            "/dashboard/tasks",
            "/dashboard/flashcards",
            "/dashboard/quizzes/123",
            "/settings",
            "/",
            "/dashboards",
        ] {
            assert_eq!(root_redirect(path, "tasks"), None, "path {}", path);
        }
    }

    #[test]
    fn test_root_redirects_to_default_view() {
        assert_eq!(
            root_redirect("/dashboard", "tasks").as_deref(),
            Some("/dashboard/tasks")
        );
        assert_eq!(
            root_redirect("/dashboard/", "flashcards").as_deref(),
            Some("/dashboard/flashcards")
        );
    }

    #[test]
    fn test_redirect_target_does_not_retrigger() {
        let target = root_redirect("/dashboard", "tasks").unwrap();
        assert_eq!(root_redirect(&target, "tasks"), None);
    }

    #[test]
    fn test_empty_default_view_yields_no_redirect() {
        assert_eq!(root_redirect("/dashboard", ""), None);
        assert_eq!(root_redirect("/dashboard", "/"), None);
    }
}
