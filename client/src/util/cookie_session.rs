//! Browser cookie implementation of the session store.
//!
//! TRADE-OFFS
//! ==========
//! `document.cookie` is the only persistence; SSR paths see no token and
//! writes are no-ops, so server-rendered guarded pages always stay in their
//! pending state until hydration runs the guard.

use session::SessionStore;
use session::cookie::{clear_token_cookie, find_token, token_cookie};

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Session store backed by the `token` cookie.
///
/// Zero-sized handle provided through Leptos context; every call reads the
/// live cookie jar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CookieSession;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

fn read_cookies() -> String {
    #[cfg(feature = "hydrate")]
    {
        html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(assignment).is_err() {
                log::error!("failed to write session cookie");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}

impl SessionStore for CookieSession {
    fn token(&self) -> Option<String> {
        find_token(&read_cookies())
    }

    fn store(&self, token: &str) {
        write_cookie(&token_cookie(token));
    }

    fn clear(&self) {
        write_cookie(&clear_token_cookie());
    }
}

/// Token of the current browser session, for `Authorization` headers.
pub fn session_token() -> Option<String> {
    CookieSession.token()
}
