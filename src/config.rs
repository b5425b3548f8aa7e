// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;

use crate::{db::MockDashboardRepository, services::DashboardService};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LIST_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: String,
    pub recent_orders_limit: usize,
    pub notifications_limit: usize,
}

impl AppConfig {
    /// Lê o `.env` (se existir) e depois as variáveis de ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("APP_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let recent_orders_limit = parse_limit(&lookup, "RECENT_ORDERS_LIMIT")?;
        let notifications_limit = parse_limit(&lookup, "NOTIFICATIONS_LIMIT")?;

        Ok(Self {
            addr,
            recent_orders_limit,
            notifications_limit,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            recent_orders_limit: DEFAULT_LIST_LIMIT,
            notifications_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

fn parse_limit<F>(lookup: &F, key: &str) -> anyhow::Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} deve ser um número inteiro (recebido: '{}')", key, raw)),
        None => Ok(DEFAULT_LIST_LIMIT),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        // --- Monta o gráfico de dependências ---
        let source = Arc::new(MockDashboardRepository::new());
        let dashboard_service = DashboardService::new(
            source,
            config.recent_orders_limit,
            config.notifications_limit,
        );

        Self { dashboard_service }
    }
}
