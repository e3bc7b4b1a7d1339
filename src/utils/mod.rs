//! Shared browser helpers.

pub mod log;
pub mod storage;

/// Navigate the current page to a relative or absolute location.
/// A rejected navigation is logged rather than propagated.
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            log::error("nav", &format!("navigation to {path} failed: {err:?}"));
        }
    }
}
