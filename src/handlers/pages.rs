// src/handlers/pages.rs

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::dashboard::RangeQuery,
    views::dashboard::{DASHBOARD_ROUTE, DashboardPage, DashboardView},
};

// GET /
pub async fn index() -> Redirect {
    Redirect::to(DASHBOARD_ROUTE)
}

// GET /merchant/dashboard
pub async fn merchant_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Html<String>, AppError> {
    let range = query.time_range();
    tracing::info!(range = range.as_str(), "Renderizando painel do lojista");

    let overview = app_state.dashboard_service.get_overview(range).await?;

    let page = DashboardPage::new(DashboardView::from(overview));

    Ok(Html(page.render()?))
}
