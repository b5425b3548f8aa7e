// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::DashboardSource,
    models::dashboard::{
        Kpi, Notification, NotificationType, OrderStatus, QuickAction, RecentOrder, SalesChart,
        StoreHeader, TimeRange,
    },
};

/// Tudo que o painel precisa numa única leitura.
#[derive(Debug, Clone)]
pub struct DashboardOverview {
    pub header: StoreHeader,
    pub kpis: Vec<Kpi>,
    pub sales_chart: SalesChart,
    pub recent_orders: Vec<RecentOrder>,
    pub notifications: Vec<Notification>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
    recent_orders_limit: usize,
    notifications_limit: usize,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn DashboardSource>,
        recent_orders_limit: usize,
        notifications_limit: usize,
    ) -> Self {
        Self {
            source,
            recent_orders_limit,
            notifications_limit,
        }
    }

    pub async fn get_header(&self) -> Result<StoreHeader, AppError> {
        self.source.store_header().await
    }

    pub async fn get_summary(&self) -> Result<Vec<Kpi>, AppError> {
        self.source.kpis().await
    }

    /// O período só é devolvido junto com a série: a fonte não filtra por ele,
    /// então qualquer período mostra as mesmas barras da semana.
    pub async fn get_sales_chart(&self, range: TimeRange) -> Result<SalesChart, AppError> {
        let points = self.source.weekly_sales().await?;
        tracing::debug!(range = range.as_str(), points = points.len(), "Série de vendas carregada");

        Ok(SalesChart { range, points })
    }

    pub async fn get_recent_orders(&self) -> Result<Vec<RecentOrder>, AppError> {
        let orders = self.source.recent_orders(self.recent_orders_limit).await?;

        for order in orders.iter().filter(|o| o.status == OrderStatus::Desconhecido) {
            tracing::warn!(order = %order.id, "Pedido com status desconhecido, usando badge neutro");
        }

        Ok(orders)
    }

    pub async fn get_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let notifications = self.source.notifications(self.notifications_limit).await?;

        for n in notifications.iter().filter(|n| n.kind == NotificationType::Other) {
            tracing::warn!(notification = n.id, "Notificação de tipo desconhecido, usando ícone de alerta");
        }

        Ok(notifications)
    }

    pub async fn get_quick_actions(&self) -> Result<Vec<QuickAction>, AppError> {
        self.source.quick_actions().await
    }

    pub async fn get_overview(&self, range: TimeRange) -> Result<DashboardOverview, AppError> {
        Ok(DashboardOverview {
            header: self.get_header().await?,
            kpis: self.get_summary().await?,
            sales_chart: self.get_sales_chart(range).await?,
            recent_orders: self.get_recent_orders().await?,
            notifications: self.get_notifications().await?,
            quick_actions: self.get_quick_actions().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockDashboardRepository;

    fn service(orders: usize, notifications: usize) -> DashboardService {
        DashboardService::new(Arc::new(MockDashboardRepository::new()), orders, notifications)
    }

    #[tokio::test]
    async fn sales_chart_ignores_selected_range() {
        let service = service(5, 5);
        let week = service.get_sales_chart(TimeRange::Week).await.unwrap();

        for range in TimeRange::ALL {
            let chart = service.get_sales_chart(range).await.unwrap();
            assert_eq!(chart.range, range);
            assert_eq!(chart.points, week.points);
        }
    }

    #[tokio::test]
    async fn overview_respects_configured_limits() {
        let overview = service(1, 2).get_overview(TimeRange::LastMonth).await.unwrap();

        assert_eq!(overview.kpis.len(), 4);
        assert_eq!(overview.recent_orders.len(), 1);
        assert_eq!(overview.recent_orders[0].id, "#1234");
        assert_eq!(overview.notifications.len(), 2);
        assert_eq!(overview.quick_actions.len(), 4);
        assert_eq!(overview.sales_chart.range, TimeRange::LastMonth);
        assert_eq!(overview.header.unread_notifications, 3);
    }
}
