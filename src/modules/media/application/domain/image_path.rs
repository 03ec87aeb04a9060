const PUBLIC_SEGMENT: &str = "public/";

/// Maps whatever was stored as an image reference to something a browser can
/// load: absolute URLs pass through, local filesystem paths collapse to a
/// web-root-relative path.
pub fn normalize_path(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    // latest `public/` that still has something after it
    let rest = raw
        .rmatch_indices(PUBLIC_SEGMENT)
        .map(|(index, _)| &raw[index + PUBLIC_SEGMENT.len()..])
        .find(|rest| !rest.is_empty());
    if let Some(rest) = rest {
        return format!("/{rest}");
    }

    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{raw}")
    }
}

pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_unchanged() {
        assert_eq!(
            normalize_path(Some("https://x.com/a.png")),
            "https://x.com/a.png"
        );
        assert_eq!(
            normalize_path(Some("http://x.com/public/a.png")),
            "http://x.com/public/a.png"
        );
    }

    #[test]
    fn public_prefix_is_stripped() {
        assert_eq!(normalize_path(Some("myproj/public/logo.png")), "/logo.png");
        assert_eq!(
            normalize_path(Some("/home/me/site/public/img/a.png")),
            "/img/a.png"
        );
    }

    #[test]
    fn last_public_segment_wins() {
        assert_eq!(
            normalize_path(Some("a/public/b/public/c.png")),
            "/c.png"
        );
    }

    #[test]
    fn rooted_paths_are_unchanged() {
        assert_eq!(normalize_path(Some("/already/abs.png")), "/already/abs.png");
    }

    #[test]
    fn bare_names_get_a_leading_slash() {
        assert_eq!(normalize_path(Some("bare.png")), "/bare.png");
        assert_eq!(normalize_path(Some("img/bare.png")), "/img/bare.png");
    }

    #[test]
    fn dangling_public_segment_falls_through() {
        assert_eq!(normalize_path(Some("site/public/")), "/site/public/");
    }

    #[test]
    fn dangling_last_segment_uses_an_earlier_public() {
        assert_eq!(normalize_path(Some("a/public/b/public/")), "/b/public/");
        assert_eq!(
            normalize_path(Some("/srv/public/img/public/")),
            "/img/public/"
        );
    }

    #[test]
    fn absent_or_empty_is_empty() {
        assert_eq!(normalize_path(None), "");
        assert_eq!(normalize_path(Some("")), "");
    }
}
