//! Active-link classification against the current route path.
//!
//! The home link only matches exactly (its path is a textual prefix of most
//! other routes); every other link matches by prefix so sub-pages keep their
//! section highlighted. No trailing-slash or case normalisation is applied,
//! so `/workshop` still matches a `/work` link.

/// Default home route.
pub const HOME_HREF: &str = "/home";

pub fn is_active(current_path: &str, link_href: &str) -> bool {
    is_active_with_home(current_path, link_href, HOME_HREF)
}

pub fn is_active_with_home(current_path: &str, link_href: &str, home_href: &str) -> bool {
    if link_href == home_href {
        current_path == link_href
    } else {
        current_path.starts_with(link_href)
    }
}
