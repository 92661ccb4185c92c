//! Smooth scrolling for in-page anchor navigation. Cosmetic, with no shared
//! state with the signup form controller.

/// What the nav helper needs from the page: fragment lookup and smooth
/// scrolling.
pub trait NavPage {
    fn has_element(&self, id: &str) -> bool;
    fn scroll_into_view(&mut self, id: &str);
}

/// Handles a click on a navigation anchor. Returns `true` when the default
/// jump navigation should be suppressed, i.e. for every in-page fragment
/// link. The page is scrolled only when the fragment's target exists.
pub fn handle_anchor_click<P: NavPage>(page: &mut P, href: &str) -> bool {
    let Some(fragment) = href.strip_prefix('#') else {
        return false;
    };
    if !fragment.is_empty() && page.has_element(fragment) {
        page.scroll_into_view(fragment);
    }
    true
}
