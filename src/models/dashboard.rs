// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums ---

/// Referência a um ícone do conjunto externo. O nome é o que vai para o HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    DollarSign,
    ShoppingBag,
    Package,
    Star,
    AlertTriangle,
    Plus,
    RotateCcw,
    Store,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::DollarSign => "dollar-sign",
            Icon::ShoppingBag => "shopping-bag",
            Icon::Package => "package",
            Icon::Star => "star",
            Icon::AlertTriangle => "alert-triangle",
            Icon::Plus => "plus",
            Icon::RotateCcw => "rotate-ccw",
            Icon::Store => "store",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pendente,
    Preparando,
    Pronto,
    // Qualquer valor fora do conjunto cai aqui (sem erro)
    #[serde(other)]
    Desconhecido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Order,
    Review,
    Stock,
    #[serde(other)]
    Other,
}

/// Período selecionado no dropdown do gráfico de vendas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "last_month")]
    LastMonth,
    #[serde(rename = "last_3_months")]
    LastThreeMonths,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Week,
        TimeRange::LastMonth,
        TimeRange::LastThreeMonths,
    ];

    /// Valor usado na query string (`?range=`).
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::LastMonth => "last_month",
            TimeRange::LastThreeMonths => "last_3_months",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "Esta semana",
            TimeRange::LastMonth => "Mês passado",
            TimeRange::LastThreeMonths => "Últimos 3 meses",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == value)
    }
}

// --- Registros exibidos ---

// 1. Cards do topo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    #[schema(example = "Vendas Hoje")]
    pub title: String,
    #[schema(example = "R$ 2.847,50")]
    pub value: String,
    #[schema(example = "+12,5% vs ontem")]
    pub change: String,
    pub icon: Icon,
    #[schema(example = "#10B981")]
    pub color: String,
    #[schema(example = "#F0FDF4")]
    pub bg_color: String,
}

// 2. Gráfico de vendas da semana
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    #[schema(example = "Seg")]
    pub day: String,
    #[schema(example = "1200")]
    pub value: Decimal,
}

// 3. Pedidos recentes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    #[schema(example = "#1234")]
    pub id: String,
    #[schema(example = "Maria Silva")]
    pub customer: String,
    #[schema(example = "89.90")]
    pub total: Decimal,
    #[schema(example = "5 min atrás")]
    pub time: String,
    pub status: OrderStatus,
}

// 4. Notificações
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[schema(example = 1)]
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[schema(example = "Novo pedido #1237 recebido")]
    pub message: String,
    #[schema(example = "2 min atrás")]
    pub time: String,
}

// 5. Cabeçalho
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreHeader {
    #[schema(example = "Padaria Sabor Mineiro")]
    pub store_name: String,
    #[schema(example = "Última atualização: há 5 minutos")]
    pub last_updated: String,
    #[schema(example = 3)]
    pub unread_notifications: u32,
}

// 6. Ações rápidas
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    #[schema(example = "Adicionar Produto")]
    pub label: String,
    #[schema(example = "/merchant/products/new")]
    pub href: String,
    pub icon: Icon,
    #[schema(example = "#3B82F6")]
    pub color: String,
}

// Resposta do gráfico: o período volta junto, os pontos não dependem dele
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesChart {
    pub range: TimeRange,
    pub points: Vec<SalesPoint>,
}
