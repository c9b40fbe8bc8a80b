use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, Redirect},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::travel_dto::{CreateTravelRequest, DeleteResponse, HealthResponse, UpdateTravelRequest};
use crate::routes::extract::JsonOrForm;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};
use crate::views;

pub fn create_travel_router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_page))
        .route("/insert", post(create_travel))
        .route("/delete/:id", delete(delete_travel))
        .route("/update/:id", put(update_travel).patch(update_travel))
        .route("/health", get(health))
}

async fn admin_page(State(state): State<AppState>) -> Html<String> {
    let catalog = state.catalog.read().await;
    Html(views::render_admin(catalog.travels()))
}

async fn create_travel(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateTravelRequest>,
) -> Result<Redirect, AppError> {
    request.validate()?;

    let mut catalog = state.catalog.write().await;
    catalog.insert(request).await?;

    Ok(Redirect::to("/admin"))
}

async fn delete_travel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut catalog = state.catalog.write().await;
    catalog.delete(&id).await?;

    Ok(Json(DeleteResponse::deleted()))
}

async fn update_travel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(patch): JsonOrForm<UpdateTravelRequest>,
) -> Result<&'static str, AppError> {
    patch.validate()?;

    let mut catalog = state.catalog.write().await;
    catalog.update(&id, &patch).await?;

    Ok("todo OK")
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.catalog.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        travels: catalog.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Página de un viaje resuelta con la tabla de rutas del arranque
pub async fn show_travel(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let path = uri.path();
    let id = state
        .routes
        .resolve(path)
        .ok_or_else(|| not_found_error("route", path))?;

    let catalog = state.catalog.read().await;
    let travel = catalog
        .find_by_id(id)
        .ok_or_else(|| not_found_error("travel", id))?;

    Ok(Html(views::render_travel(travel, catalog.travels())))
}
