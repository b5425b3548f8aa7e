// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;
use crate::views;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
        handlers::dashboard::get_summary,
        handlers::dashboard::get_sales_chart,
        handlers::dashboard::get_recent_orders,
        handlers::dashboard::get_notifications,
        handlers::dashboard::get_quick_actions,
    ),
    components(
        schemas(
            // --- MODELS ---
            models::dashboard::Icon,
            models::dashboard::OrderStatus,
            models::dashboard::NotificationType,
            models::dashboard::TimeRange,
            models::dashboard::Kpi,
            models::dashboard::SalesPoint,
            models::dashboard::SalesChart,
            models::dashboard::RecentOrder,
            models::dashboard::Notification,
            models::dashboard::StoreHeader,
            models::dashboard::QuickAction,

            // --- VIEWS ---
            views::dashboard::Badge,
            views::dashboard::OrderRow,
            views::dashboard::NotificationRow,
            views::dashboard::PeriodOption,
            views::dashboard::DashboardView,
        )
    ),
    tags(
        (name = "Dashboard", description = "Painel do Lojista: indicadores, vendas, pedidos e atalhos")
    )
)]
pub struct ApiDoc;
