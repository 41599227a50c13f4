use crate::constants::reconcile::LOGO_PREVIEW_SUFFIX;

/// Turns a badge URL into its full-resolution form.
///
/// TheSportsDB serves a thumbnail at `<badge>/preview`; stripping that suffix
/// gives the original image. A missing URL becomes an empty string.
///
/// # Example
/// ```
/// use stadium_finder::data_fetcher::reconciler::normalize_logo_url;
///
/// assert_eq!(normalize_logo_url(Some("http://x/img/preview")), "http://x/img");
/// assert_eq!(normalize_logo_url(Some("http://x/img")), "http://x/img");
/// assert_eq!(normalize_logo_url(None), "");
/// ```
pub fn normalize_logo_url(logo_url: Option<&str>) -> String {
    match logo_url {
        Some(url) => url
            .strip_suffix(LOGO_PREVIEW_SUFFIX)
            .unwrap_or(url)
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_preview_suffix() {
        assert_eq!(
            normalize_logo_url(Some(
                "https://r2.thesportsdb.com/images/media/team/badge/xqwpup.png/preview"
            )),
            "https://r2.thesportsdb.com/images/media/team/badge/xqwpup.png"
        );
    }

    #[test]
    fn test_leaves_other_urls_unchanged() {
        assert_eq!(
            normalize_logo_url(Some("https://img.example.com/badge.png")),
            "https://img.example.com/badge.png"
        );
        // Only a trailing suffix counts
        assert_eq!(
            normalize_logo_url(Some("https://img.example.com/preview/badge.png")),
            "https://img.example.com/preview/badge.png"
        );
        assert_eq!(normalize_logo_url(Some("")), "");
    }

    #[test]
    fn test_strips_suffix_once() {
        assert_eq!(
            normalize_logo_url(Some("http://x/img/preview/preview")),
            "http://x/img/preview"
        );
    }

    #[test]
    fn test_missing_logo_is_empty() {
        assert_eq!(normalize_logo_url(None), "");
    }
}
