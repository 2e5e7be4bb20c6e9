//! Flash notices carried across a redirect in a cookie.
//!
//! The cookie holds the pending notices as hex-encoded JSON and is cleared by
//! the first page that displays them. Unreadable values are dropped.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::models::flash::Flash;

const FLASH_COOKIE: &str = "flash";

/// Queue a notice for the next rendered page.
pub fn push(jar: CookieJar, flash: Flash) -> CookieJar {
    let mut pending = read(&jar);
    pending.push(flash);

    let cookie = Cookie::build((FLASH_COOKIE, encode(&pending)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Take every queued notice and clear the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<Flash>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let pending = read(&jar);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), pending)
}

fn read(jar: &CookieJar) -> Vec<Flash> {
    jar.get(FLASH_COOKIE)
        .map(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

fn encode(flashes: &[Flash]) -> String {
    hex::encode(serde_json::to_vec(flashes).unwrap_or_default())
}

fn decode(value: &str) -> Vec<Flash> {
    hex::decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}
