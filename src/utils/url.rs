// src/utils/url.rs

//! URL manipulation utilities.

/// Turn a site-relative URL into an absolute `https` URL on `host`.
///
/// Anything starting with `http` is taken to be absolute already and is
/// returned untouched. The path of a relative URL always starts with a
/// single `/`.
///
/// # Examples
/// ```
/// use indexnow::utils::url::normalize;
///
/// assert_eq!(
///     normalize("rugbyaustralia2027.com", "tickets"),
///     "https://rugbyaustralia2027.com/tickets"
/// );
/// assert_eq!(
///     normalize("rugbyaustralia2027.com", "/tickets"),
///     "https://rugbyaustralia2027.com/tickets"
/// );
/// ```
pub fn normalize(host: &str, url: &str) -> String {
    if url.starts_with("http") {
        return url.to_string();
    }

    format!("https://{host}/{}", url.trim_start_matches('/'))
}

/// Normalize every URL in `urls`, preserving order and duplicates.
pub fn normalize_all<S: AsRef<str>>(host: &str, urls: &[S]) -> Vec<String> {
    urls.iter().map(|u| normalize(host, u.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "rugbyaustralia2027.com";

    #[test]
    fn test_relative_with_and_without_slash() {
        assert_eq!(normalize(HOST, "/teams"), "https://rugbyaustralia2027.com/teams");
        assert_eq!(normalize(HOST, "teams"), "https://rugbyaustralia2027.com/teams");
        assert_eq!(normalize(HOST, "/"), "https://rugbyaustralia2027.com/");
        assert_eq!(normalize(HOST, ""), "https://rugbyaustralia2027.com/");
        assert_eq!(normalize(HOST, "//tickets"), "https://rugbyaustralia2027.com/tickets");
        assert_eq!(normalize(HOST, "///"), "https://rugbyaustralia2027.com/");
    }

    #[test]
    fn test_absolute_is_identity() {
        for url in [
            "https://rugbyaustralia2027.com/schedule",
            "http://rugbyaustralia2027.com/schedule",
            "https://other.example/x?y=1",
        ] {
            assert_eq!(normalize(HOST, url), url);
        }
    }

    #[test]
    fn test_mixed_list_keeps_order() {
        let urls = ["/tickets", "https://rugbyaustralia2027.com/schedule"];
        assert_eq!(
            normalize_all(HOST, &urls),
            vec![
                "https://rugbyaustralia2027.com/tickets".to_string(),
                "https://rugbyaustralia2027.com/schedule".to_string(),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let urls = ["/news", "news"];
        assert_eq!(normalize_all(HOST, &urls).len(), 2);
    }
}
