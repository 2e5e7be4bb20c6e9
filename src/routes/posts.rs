//! Blog post routes: list and create.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::db::posts;
use crate::errors::AppError;
use crate::models::flash::Flash;
use crate::models::post::{NewPostForm, PostFormErrors, PLACEHOLDER_AUTHOR_ID};
use crate::services::flash;
use crate::templates::{CreatePostPage, HomePage};
use crate::AppState;

/// GET / and GET /home — all posts.
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let posts = posts::list_all(&state.db).await?;
    let (jar, flashes) = flash::take(jar);

    let page = HomePage {
        title: "Home",
        flashes,
        posts,
    };
    Ok((jar, Html(page.render()?)))
}

/// GET /post/new — empty form.
pub async fn new_post(jar: CookieJar) -> Result<(CookieJar, Html<String>), AppError> {
    let (jar, flashes) = flash::take(jar);
    let page = CreatePostPage {
        title: "New Post",
        flashes,
        form: NewPostForm::default(),
        errors: PostFormErrors::default(),
    };
    Ok((jar, Html(page.render()?)))
}

/// POST /post/new — validate, store and redirect home; invalid input
/// re-renders the form with field errors.
pub async fn create_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<NewPostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        tracing::debug!(error = %errors, "Rejected post form");
        let page = CreatePostPage {
            title: "New Post",
            flashes: Vec::new(),
            errors: PostFormErrors::from(&errors),
            form,
        };
        return Ok(Html(page.render()?).into_response());
    }

    let post = posts::insert(&state.db, &form, PLACEHOLDER_AUTHOR_ID).await?;
    tracing::info!(post_id = post.id, title = %post.title, "Blog post created");

    let jar = flash::push(jar, Flash::success("Your post has been created!"));
    Ok((jar, Redirect::to("/home")).into_response())
}
