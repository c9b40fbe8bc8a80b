//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::routes::route_table::RouteTable;
use crate::services::catalog_service::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    /// Las mutaciones toman el lock de escritura hasta que el snapshot
    /// queda escrito, así que se ejecutan de una en una.
    pub catalog: Arc<RwLock<CatalogStore>>,
    /// Rutas de cada viaje, calculadas una sola vez al arrancar
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, catalog: CatalogStore) -> Self {
        let routes = RouteTable::build(catalog.travels());
        log::info!("🧭 {} rutas de viaje registradas", routes.len());

        Self {
            config,
            catalog: Arc::new(RwLock::new(catalog)),
            routes: Arc::new(routes),
        }
    }
}
