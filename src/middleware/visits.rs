//! Page-view counting in front of every site route.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Local;

use crate::db::visits;
use crate::errors::AppError;
use crate::middleware::client_ip;
use crate::AppState;

/// Count the request against today's counter and record the visitor's
/// address for the day before handing over to the route.
///
/// If the counter cannot be committed the request fails with a 500 and the
/// handler does not run.
pub async fn count_visit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip::resolve(peer.ip(), request.headers(), &state.config.trusted_proxies);
    let today = Local::now().date_naive();

    let visit = visits::record_visit(&state.db, &ip.to_string(), today)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, ip = %ip, date = %today, "Failed to record visit");
        })?;

    tracing::debug!(
        ip = %ip,
        date = %today,
        views = visit.views,
        first_for_ip = visit.first_for_ip,
        "Visit recorded"
    );

    Ok(next.run(request).await)
}
