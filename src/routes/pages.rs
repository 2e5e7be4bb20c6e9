//! Static pages and the site-wide fallback.

use askama::Template;
use axum::{http::Uri, response::Html};
use axum_extra::extract::cookie::CookieJar;

use crate::errors::AppError;
use crate::services::flash;
use crate::templates::AboutPage;

/// GET /about
pub async fn about(jar: CookieJar) -> Result<(CookieJar, Html<String>), AppError> {
    let (jar, flashes) = flash::take(jar);
    let page = AboutPage {
        title: "About page",
        flashes,
    };
    Ok((jar, Html(page.render()?)))
}

/// Any unmatched path.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
