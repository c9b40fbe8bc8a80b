pub mod extract;
pub mod route_table;
pub mod travel_routes;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Router completo: endpoints del panel, archivos estáticos y, si no hay
/// archivo, la página del viaje registrado para esa ruta.
pub fn create_app_router(state: AppState) -> Router {
    let travel_pages: MethodRouter = get(travel_routes::show_travel).with_state(state.clone());
    let statics = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(travel_pages);

    Router::new()
        .merge(travel_routes::create_travel_router())
        .fallback_service(statics)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
