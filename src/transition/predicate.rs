//! Which clicked links get the animated transition.

/// A link qualifies when its raw `href` attribute is an in-site page:
/// present, not a fragment, not absolute (`http…`), not a `.zip`, and
/// pointing at an `.html` resource. The `.zip` exclusion wins over `.html`.
pub fn should_transition(href: Option<&str>) -> bool {
    let Some(href) = href else {
        return false;
    };
    !href.is_empty()
        && !href.starts_with('#')
        && !href.starts_with("http")
        && !href.contains(".zip")
        && href.contains(".html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifying_pages() {
        assert!(should_transition(Some("services.html")));
        assert!(should_transition(Some("about-us.html#team")));
        assert!(should_transition(Some("../game.html?level=2")));
    }

    #[test]
    fn test_rejected_links() {
        assert!(!should_transition(None));
        assert!(!should_transition(Some("")));
        assert!(!should_transition(Some("#team")));
        assert!(!should_transition(Some("http://x.com/a.html")));
        assert!(!should_transition(Some("https://x.com/a.html")));
        assert!(!should_transition(Some("archive.zip")));
        assert!(!should_transition(Some("archive.zip.html")));
        assert!(!should_transition(Some("contact.php")));
    }
}
