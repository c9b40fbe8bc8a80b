//! Extractor para cuerpos JSON o de formulario
//!
//! El formulario de alta del panel llega como
//! `application/x-www-form-urlencoded`; el script del panel y los clientes
//! de la API mandan JSON.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form, Json,
};
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(Self(value))
        }
    }
}
