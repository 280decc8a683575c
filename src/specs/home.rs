// src/specs/home.rs
use scraper::Html;

use crate::config::consts::PROFILE_HREF;
use crate::core::html::hrefs_containing;

/// Vendor profile links on the landing page, in page order.
pub fn profile_links(html_doc: &str) -> Vec<String> {
    let doc = Html::parse_document(html_doc);
    let links = hrefs_containing(&doc, &[PROFILE_HREF]);
    logd!("Home: {} profile link(s)", links.len());
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_profile_links_only() {
        let page = r#"<nav><a href="/home">Home</a><a href="/profile/me">My profile</a></nav>
            <div class="featured"><a href="/profile/acme">acme</a> <a href="/items/17">item</a>
            <a href="/profile/acme">acme</a><a href="/profile/zeta">zeta</a></div>"#;
        assert_eq!(profile_links(page), vec!["/profile/me", "/profile/acme", "/profile/zeta"]);
    }

    #[test]
    fn empty_page_has_no_links() {
        assert!(profile_links("<html><body>captcha</body></html>").is_empty());
    }
}
