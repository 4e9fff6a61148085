//! Blocking notifications and full-page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page controller talks to the browser window only through
//! [`BrowserShell`], so logout and create-board feedback can be asserted in
//! native tests.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Page the browser is sent to after logout.
pub const ENTRY_PAGE: &str = "index.html";

/// Window-level side effects the page needs.
pub trait BrowserShell {
    /// Show a blocking, user-visible message.
    fn notify(&self, message: &str);

    /// Leave the current page for `href`.
    fn navigate(&self, href: &str);
}

/// [`BrowserShell`] over `window.alert` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowShell;

impl BrowserShell for WindowShell {
    fn notify(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                return;
            }
        }
        log::info!("notification: {message}");
    }

    fn navigate(&self, href: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(href).is_ok() {
                    return;
                }
            }
        }
        log::warn!("navigation to {href} not performed");
    }
}
