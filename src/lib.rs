//! Catálogo de viajes
//!
//! Aplicación web con el listado de ofertas de viaje, una página por oferta
//! y un panel de administración con altas, bajas y modificaciones sobre un
//! archivo JSON.

pub mod config;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use axum::Router;

use config::environment::EnvironmentConfig;
use repositories::travel_repository::TravelRepository;
use services::catalog_service::CatalogStore;
use state::AppState;
use utils::errors::AppResult;

/// Cargar el catálogo, calcular las rutas y montar el router
pub async fn bootstrap(config: EnvironmentConfig) -> AppResult<Router> {
    let repository = TravelRepository::new(&config.data_file);
    let catalog = CatalogStore::load(repository).await?;

    let state = AppState::new(config, catalog);
    Ok(routes::create_app_router(state))
}
