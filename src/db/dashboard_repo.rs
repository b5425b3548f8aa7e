// src/db/dashboard_repo.rs

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::dashboard::{
        Icon, Kpi, Notification, NotificationType, OrderStatus, QuickAction, RecentOrder,
        SalesPoint, StoreHeader,
    },
};

/// Interface de consulta do painel do lojista.
///
/// Hoje só existe a implementação com dados fixos; um backend real entra
/// implementando este trait, sem mexer no serviço nem nas views. Falhas de
/// I/O da fonte sobem como `AppError::InternalServerError` (via `anyhow::Error`)
/// e viram HTTP 500 com mensagem genérica.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn store_header(&self) -> Result<StoreHeader, AppError>;

    async fn kpis(&self) -> Result<Vec<Kpi>, AppError>;

    /// Série da semana, de segunda a domingo.
    async fn weekly_sales(&self) -> Result<Vec<SalesPoint>, AppError>;

    /// Pedidos mais recentes primeiro, no máximo `limit`.
    async fn recent_orders(&self, limit: usize) -> Result<Vec<RecentOrder>, AppError>;

    async fn notifications(&self, limit: usize) -> Result<Vec<Notification>, AppError>;

    async fn quick_actions(&self) -> Result<Vec<QuickAction>, AppError>;
}

// Dados de exemplo, montados uma vez e nunca alterados
#[derive(Clone)]
pub struct MockDashboardRepository {
    header: StoreHeader,
    kpis: Vec<Kpi>,
    sales: Vec<SalesPoint>,
    orders: Vec<RecentOrder>,
    notifications: Vec<Notification>,
    quick_actions: Vec<QuickAction>,
}

impl MockDashboardRepository {
    pub fn new() -> Self {
        Self {
            header: StoreHeader {
                store_name: "Padaria Sabor Mineiro".into(),
                last_updated: "Última atualização: há 5 minutos".into(),
                unread_notifications: 3,
            },
            kpis: vec![
                kpi("Vendas Hoje", "R$ 2.847,50", "+12,5% vs ontem", Icon::DollarSign, "#10B981", "#F0FDF4"),
                kpi("Pedidos Hoje", "47", "+8 vs ontem", Icon::ShoppingBag, "#3B82F6", "#EFF6FF"),
                kpi("Produtos Ativos", "156", "3 com estoque baixo", Icon::Package, "#8B5CF6", "#F5F3FF"),
                kpi("Avaliação Média", "4,8", "128 avaliações", Icon::Star, "#F59E0B", "#FFFBEB"),
            ],
            sales: [
                ("Seg", 1200),
                ("Ter", 1890),
                ("Qua", 2300),
                ("Qui", 1650),
                ("Sex", 2800),
                ("Sab", 3200),
                ("Dom", 2100),
            ]
            .into_iter()
            .map(|(day, value)| SalesPoint {
                day: day.into(),
                value: Decimal::from(value),
            })
            .collect(),
            orders: vec![
                order("#1234", "Maria Silva", Decimal::new(8990, 2), "5 min atrás", OrderStatus::Pendente),
                order("#1235", "João Santos", Decimal::new(15650, 2), "12 min atrás", OrderStatus::Preparando),
                order("#1236", "Ana Costa", Decimal::new(6730, 2), "25 min atrás", OrderStatus::Pronto),
            ],
            notifications: vec![
                notification(1, NotificationType::Order, "Novo pedido #1237 recebido", "2 min atrás"),
                notification(2, NotificationType::Review, "Nova avaliação 5 estrelas de Carlos", "1 hora atrás"),
                notification(3, NotificationType::Stock, "Estoque baixo: Pão de Queijo (5 unidades)", "3 horas atrás"),
            ],
            quick_actions: vec![
                action("Adicionar Produto", "/merchant/products/new", Icon::Plus, "#3B82F6"),
                action("Ver Pedidos", "/merchant/orders", Icon::ShoppingBag, "#10B981"),
                action("Gerenciar Devoluções", "/merchant/returns", Icon::RotateCcw, "#F59E0B"),
                action("Configurar Loja", "/merchant/profile", Icon::Store, "#8B5CF6"),
            ],
        }
    }
}

impl Default for MockDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardSource for MockDashboardRepository {
    async fn store_header(&self) -> Result<StoreHeader, AppError> {
        Ok(self.header.clone())
    }

    async fn kpis(&self) -> Result<Vec<Kpi>, AppError> {
        Ok(self.kpis.clone())
    }

    async fn weekly_sales(&self) -> Result<Vec<SalesPoint>, AppError> {
        Ok(self.sales.clone())
    }

    async fn recent_orders(&self, limit: usize) -> Result<Vec<RecentOrder>, AppError> {
        Ok(self.orders.iter().take(limit).cloned().collect())
    }

    async fn notifications(&self, limit: usize) -> Result<Vec<Notification>, AppError> {
        Ok(self.notifications.iter().take(limit).cloned().collect())
    }

    async fn quick_actions(&self) -> Result<Vec<QuickAction>, AppError> {
        Ok(self.quick_actions.clone())
    }
}

fn kpi(title: &str, value: &str, change: &str, icon: Icon, color: &str, bg_color: &str) -> Kpi {
    Kpi {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        icon,
        color: color.into(),
        bg_color: bg_color.into(),
    }
}

fn order(id: &str, customer: &str, total: Decimal, time: &str, status: OrderStatus) -> RecentOrder {
    RecentOrder {
        id: id.into(),
        customer: customer.into(),
        total,
        time: time.into(),
        status,
    }
}

fn notification(id: u32, kind: NotificationType, message: &str, time: &str) -> Notification {
    Notification {
        id,
        kind,
        message: message.into(),
        time: time.into(),
    }
}

fn action(label: &str, href: &str, icon: Icon, color: &str) -> QuickAction {
    QuickAction {
        label: label.into(),
        href: href.into(),
        icon,
        color: color.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn weekly_sales_are_seven_days_in_order() {
        let repo = MockDashboardRepository::new();
        let sales = repo.weekly_sales().await.unwrap();

        let days: Vec<&str> = sales.iter().map(|p| p.day.as_str()).collect();
        assert_eq!(days, ["Seg", "Ter", "Qua", "Qui", "Sex", "Sab", "Dom"]);

        let values: Vec<Decimal> = sales.iter().map(|p| p.value).collect();
        let expected: Vec<Decimal> = [1200, 1890, 2300, 1650, 2800, 3200, 2100]
            .into_iter()
            .map(Decimal::from)
            .collect();
        assert_eq!(values, expected);
    }

    #[tokio::test]
    async fn limits_are_applied() {
        let repo = MockDashboardRepository::new();
        assert_eq!(repo.recent_orders(2).await.unwrap().len(), 2);
        assert_eq!(repo.recent_orders(50).await.unwrap().len(), 3);
        assert!(repo.notifications(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quick_actions_point_to_merchant_routes() {
        let repo = MockDashboardRepository::new();
        let hrefs: Vec<String> = repo
            .quick_actions()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.href)
            .collect();
        assert_eq!(
            hrefs,
            [
                "/merchant/products/new",
                "/merchant/orders",
                "/merchant/returns",
                "/merchant/profile"
            ]
        );
    }
}
