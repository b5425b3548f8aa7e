// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    // Importamos os models para referenciar no OpenAPI
    models::dashboard::{Kpi, QuickAction, SalesChart, TimeRange},
    views::dashboard::{DashboardView, NotificationRow, OrderRow},
};

/// `?range=` do dropdown de período. Ausente, vazio ou desconhecido vale `week`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    /// Período do gráfico: week, last_month ou last_3_months
    pub range: Option<String>,
}

impl RangeQuery {
    pub fn time_range(&self) -> TimeRange {
        match self.range.as_deref().map(str::trim) {
            None | Some("") => TimeRange::default(),
            Some(value) => TimeRange::parse(value).unwrap_or_else(|| {
                tracing::warn!(range = value, "Período desconhecido, usando a semana atual");
                TimeRange::default()
            }),
        }
    }
}

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Painel completo do lojista", body = DashboardView)
    ),
    params(RangeQuery)
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.time_range();

    let overview = app_state.dashboard_service.get_overview(range).await?;

    Ok((StatusCode::OK, Json(DashboardView::from(overview))))
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Os quatro cards de indicadores", body = Vec<Kpi>)
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.dashboard_service.get_summary().await?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/sales-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/sales-chart",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Vendas da semana (o período não altera a série)", body = SalesChart)
    ),
    params(RangeQuery)
)]
pub async fn get_sales_chart(
    State(app_state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.time_range();

    let chart = app_state.dashboard_service.get_sales_chart(range).await?;

    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/dashboard/recent-orders
#[utoipa::path(
    get,
    path = "/api/dashboard/recent-orders",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Pedidos recentes com badge de status", body = Vec<OrderRow>)
    )
)]
pub async fn get_recent_orders(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders: Vec<OrderRow> = app_state
        .dashboard_service
        .get_recent_orders()
        .await?
        .into_iter()
        .map(OrderRow::from)
        .collect();

    Ok((StatusCode::OK, Json(orders)))
}

// GET /api/dashboard/notifications
#[utoipa::path(
    get,
    path = "/api/dashboard/notifications",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Notificações com o ícone de cada tipo", body = Vec<NotificationRow>)
    )
)]
pub async fn get_notifications(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let notifications: Vec<NotificationRow> = app_state
        .dashboard_service
        .get_notifications()
        .await?
        .into_iter()
        .map(NotificationRow::from)
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

// GET /api/dashboard/quick-actions
#[utoipa::path(
    get,
    path = "/api/dashboard/quick-actions",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Atalhos do lojista", body = Vec<QuickAction>)
    )
)]
pub async fn get_quick_actions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let actions = app_state.dashboard_service.get_quick_actions().await?;

    Ok((StatusCode::OK, Json(actions)))
}
