//! Dashboard route: the three charts, or a degraded page if aggregation fails.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::models::flash::Flash;
use crate::services::dashboard;
use crate::templates::DashboardPage;
use crate::AppState;

/// GET /dashboard
///
/// Aggregation failures never reach the caller as errors: they are logged
/// and shown as a danger notice on a chart-less page with status 200.
pub async fn show(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = match dashboard::load(&state.db).await {
        Ok(graphs) => DashboardPage {
            title: "Dashboard",
            flashes: Vec::new(),
            graphs: Some(graphs),
        },
        Err(e) => {
            tracing::error!(error = %e, "Dashboard error");
            DashboardPage {
                title: "Dashboard Error",
                flashes: vec![Flash::danger(format!("An error occurred: {e}"))],
                graphs: None,
            }
        }
    };
    Ok(Html(page.render()?))
}
