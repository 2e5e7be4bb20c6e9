//! Page templates. Every page extends `layout.html`, which renders `title`
//! and the pending flash notices.

use askama::Template;

use crate::models::flash::Flash;
use crate::models::post::{BlogPost, NewPostForm, PostFormErrors};
use crate::services::dashboard::DashboardGraphs;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
    pub flashes: Vec<Flash>,
    pub posts: Vec<BlogPost>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub title: &'static str,
    pub flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "create_post.html")]
pub struct CreatePostPage {
    pub title: &'static str,
    pub flashes: Vec<Flash>,
    pub form: NewPostForm,
    pub errors: PostFormErrors,
}

/// Dashboard page; `graphs` is `None` when aggregation failed.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: &'static str,
    pub flashes: Vec<Flash>,
    pub graphs: Option<DashboardGraphs>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub flashes: Vec<Flash>,
    pub status: u16,
    pub message: String,
}
