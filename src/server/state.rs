use std::sync::Arc;

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::SalesConfig;
use crate::sales::SalesDataset;

/// Shared handler state. The sales snapshot is built once and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    sales: Arc<SalesDataset>,
}

impl AppState {
    pub fn new(sales: SalesDataset) -> Self {
        Self {
            sales: Arc::new(sales),
        }
    }

    /// Generates the mock sales snapshot for today.
    pub fn from_config(config: &SalesConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sales = SalesDataset::generate(&mut rng, Local::now().date_naive());
        info!(records = sales.len(), seed = ?config.seed, "generated mock sales data");
        Self::new(sales)
    }

    pub fn sales(&self) -> &SalesDataset {
        &self.sales
    }
}
