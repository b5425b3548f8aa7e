// src/views/dashboard.rs

use askama::Template;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::format::format_brl,
    models::dashboard::{
        Icon, Kpi, Notification, NotificationType, OrderStatus, QuickAction, RecentOrder,
        SalesChart, StoreHeader, TimeRange,
    },
    services::DashboardOverview,
    views::{chart::BarChart, layout::KPI_GRID},
};

pub const ORDERS_ROUTE: &str = "/merchant/orders";
pub const DASHBOARD_ROUTE: &str = "/merchant/dashboard";

// Itens do menu de configurações: só visuais, nenhum executa ação
pub const SETTINGS_MENU: [&str; 3] = ["Configurações", "Perfil da Loja", "Sair"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub const fn order_badge(status: OrderStatus) -> BadgeStyle {
    match status {
        OrderStatus::Pendente => BadgeStyle { label: "Pendente", color: "#EF4444", bg_color: "#FEF2F2" },
        OrderStatus::Preparando => BadgeStyle { label: "Preparando", color: "#F59E0B", bg_color: "#FFF7ED" },
        OrderStatus::Pronto => BadgeStyle { label: "Pronto", color: "#10B981", bg_color: "#F0FDF4" },
        OrderStatus::Desconhecido => BadgeStyle { label: "Desconhecido", color: "#6B7280", bg_color: "#F3F4F6" },
    }
}

pub const fn notification_icon(kind: NotificationType) -> Icon {
    match kind {
        NotificationType::Order => Icon::ShoppingBag,
        NotificationType::Review => Icon::Star,
        // Estoque e qualquer tipo desconhecido usam o alerta
        NotificationType::Stock | NotificationType::Other => Icon::AlertTriangle,
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: String,
    pub color: String,
    pub bg_color: String,
}

impl From<BadgeStyle> for Badge {
    fn from(style: BadgeStyle) -> Self {
        Self {
            label: style.label.to_string(),
            color: style.color.to_string(),
            bg_color: style.bg_color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub total: Decimal,
    #[schema(example = "R$ 89,90")]
    pub total_label: String,
    pub time: String,
    pub status: OrderStatus,
    pub badge: Badge,
}

impl From<RecentOrder> for OrderRow {
    fn from(order: RecentOrder) -> Self {
        Self {
            total_label: format_brl(order.total),
            badge: order_badge(order.status).into(),
            id: order.id,
            customer: order.customer,
            total: order.total,
            time: order.time,
            status: order.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRow {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
    pub time: String,
    pub icon: Icon,
}

impl From<Notification> for NotificationRow {
    fn from(n: Notification) -> Self {
        Self {
            icon: notification_icon(n.kind),
            id: n.id,
            kind: n.kind,
            message: n.message,
            time: n.time,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodOption {
    pub value: TimeRange,
    pub label: String,
    pub selected: bool,
}

fn period_options(selected: TimeRange) -> Vec<PeriodOption> {
    TimeRange::ALL
        .into_iter()
        .map(|range| PeriodOption {
            value: range,
            label: range.label().to_string(),
            selected: range == selected,
        })
        .collect()
}

/// Modelo de exibição do painel, servido como JSON e usado pelo template.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub header: StoreHeader,
    pub kpis: Vec<Kpi>,
    pub period_options: Vec<PeriodOption>,
    pub sales_chart: SalesChart,
    pub recent_orders: Vec<OrderRow>,
    pub notifications: Vec<NotificationRow>,
    pub quick_actions: Vec<QuickAction>,
    #[serde(skip)]
    #[schema(ignore)]
    pub chart: BarChart,
}

impl From<DashboardOverview> for DashboardView {
    fn from(overview: DashboardOverview) -> Self {
        Self {
            chart: BarChart::build(&overview.sales_chart.points),
            period_options: period_options(overview.sales_chart.range),
            header: overview.header,
            kpis: overview.kpis,
            sales_chart: overview.sales_chart,
            recent_orders: overview.recent_orders.into_iter().map(OrderRow::from).collect(),
            notifications: overview.notifications.into_iter().map(NotificationRow::from).collect(),
            quick_actions: overview.quick_actions,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: String,
    pub view: DashboardView,
    pub kpi_grid_css: String,
    pub settings_menu: [&'static str; 3],
    pub orders_route: &'static str,
    pub dashboard_route: &'static str,
}

impl DashboardPage {
    pub fn new(view: DashboardView) -> Self {
        Self {
            title: format!("Painel - {}", view.header.store_name),
            view,
            kpi_grid_css: KPI_GRID.css(".kpi-grid"),
            settings_menu: SETTINGS_MENU,
            orders_route: ORDERS_ROUTE,
            dashboard_route: DASHBOARD_ROUTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{db::MockDashboardRepository, services::DashboardService};

    async fn view(range: TimeRange) -> DashboardView {
        let service = DashboardService::new(Arc::new(MockDashboardRepository::new()), 5, 5);
        service.get_overview(range).await.unwrap().into()
    }

    #[test]
    fn badge_colors_follow_status() {
        assert_eq!(order_badge(OrderStatus::Pendente).color, "#EF4444");
        assert_eq!(order_badge(OrderStatus::Pendente).bg_color, "#FEF2F2");
        assert_eq!(order_badge(OrderStatus::Preparando).color, "#F59E0B");
        assert_eq!(order_badge(OrderStatus::Preparando).bg_color, "#FFF7ED");
        assert_eq!(order_badge(OrderStatus::Pronto).color, "#10B981");
        assert_eq!(order_badge(OrderStatus::Pronto).bg_color, "#F0FDF4");
    }

    #[test]
    fn unknown_status_gets_neutral_badge() {
        let badge = order_badge(OrderStatus::Desconhecido);
        assert_eq!(badge.label, "Desconhecido");
        assert_eq!(badge.color, "#6B7280");
    }

    #[test]
    fn notification_icons_fall_back_to_alert() {
        assert_eq!(notification_icon(NotificationType::Order), Icon::ShoppingBag);
        assert_eq!(notification_icon(NotificationType::Review), Icon::Star);
        assert_eq!(notification_icon(NotificationType::Stock), Icon::AlertTriangle);
        assert_eq!(notification_icon(NotificationType::Other), Icon::AlertTriangle);
    }

    #[tokio::test]
    async fn order_rows_carry_formatted_totals() {
        let view = view(TimeRange::Week).await;
        let totals: Vec<&str> = view.recent_orders.iter().map(|o| o.total_label.as_str()).collect();
        assert_eq!(totals, ["R$ 89,90", "R$ 156,50", "R$ 67,30"]);

        let labels: Vec<&str> = view.recent_orders.iter().map(|o| o.badge.label.as_str()).collect();
        assert_eq!(labels, ["Pendente", "Preparando", "Pronto"]);
    }

    #[tokio::test]
    async fn only_selected_period_is_marked() {
        let view = view(TimeRange::LastThreeMonths).await;
        let selected: Vec<TimeRange> = view
            .period_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, [TimeRange::LastThreeMonths]);
        assert_eq!(view.period_options.len(), 3);
    }

    #[tokio::test]
    async fn changing_period_keeps_the_same_bars() {
        let week = view(TimeRange::Week).await;
        for range in TimeRange::ALL {
            let other = view(range).await;
            let a: Vec<Decimal> = week.chart.bars.iter().map(|b| b.value).collect();
            let b: Vec<Decimal> = other.chart.bars.iter().map(|b| b.value).collect();
            assert_eq!(a, b);
        }
    }

    #[tokio::test]
    async fn page_renders_every_section() {
        let html = DashboardPage::new(view(TimeRange::Week).await).render().unwrap();

        assert!(html.contains("Padaria Sabor Mineiro"));
        assert!(html.contains("Última atualização: há 5 minutos"));
        assert!(html.contains(r#"class="bell-badge">3<"#));
        for item in SETTINGS_MENU {
            assert!(html.contains(item));
        }
        assert_eq!(html.matches(r#"class="kpi-card""#).count(), 4);
        assert_eq!(html.matches(r#"class="chart-bar""#).count(), 7);
        assert!(html.contains("R$ 156,50"));
        assert!(html.contains(r#"href="/merchant/orders""#));
        assert!(html.contains(r#"href="/merchant/products/new""#));
        assert!(html.contains(r#"href="/merchant/returns""#));
        assert!(html.contains(r#"href="/merchant/profile""#));
        assert!(html.contains("@media (min-width: 1024px)"));
    }

    #[tokio::test]
    async fn kpi_cards_show_configured_value_and_tint() {
        let view = view(TimeRange::Week).await;
        let kpis = view.kpis.clone();
        let html = DashboardPage::new(view).render().unwrap();

        for kpi in &kpis {
            let value = format!(r#"<p class="kpi-value">{}</p>"#, kpi.value);
            let tint = format!(r#"data-icon="{}" style="color: {}""#, kpi.icon.name(), kpi.color);
            assert!(html.contains(&value), "faltou {}", value);
            assert!(html.contains(&tint), "faltou {}", tint);
        }
    }

    #[tokio::test]
    async fn bars_render_in_weekday_order() {
        let html = DashboardPage::new(view(TimeRange::LastMonth).await).render().unwrap();

        let mut last = 0;
        for (day, value) in [
            ("Seg", "1200"),
            ("Ter", "1890"),
            ("Qua", "2300"),
            ("Qui", "1650"),
            ("Sex", "2800"),
            ("Sab", "3200"),
            ("Dom", "2100"),
        ] {
            let marker = format!(r#"data-day="{}" data-value="{}""#, day, value);
            let position = html.find(&marker).unwrap_or_else(|| panic!("faltou {}", marker));
            assert!(position > last);
            last = position;
        }
        assert!(html.contains(r#"<option value="last_month" selected>"#));
    }

    #[tokio::test]
    async fn x_axis_baseline_sits_under_the_bars() {
        let view = view(TimeRange::Week).await;
        let bottom = view.chart.plot_bottom;
        for bar in &view.chart.bars {
            assert!((bar.y + bar.height - bottom).abs() < 0.01, "{}", bar.day);
        }

        let html = DashboardPage::new(view).render().unwrap();
        assert!(html.contains(
            r#"<line class="chart-baseline" x1="56" x2="624" y1="268" y2="268"></line>"#
        ));
    }
}
