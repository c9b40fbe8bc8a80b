use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::travel::DecimalInput;
use crate::utils::validation::validate_not_blank;

// Request para crear un viaje (formulario del panel o JSON)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTravelRequest {
    #[validate(custom = "validate_not_blank")]
    pub ruta: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio: DecimalInput,
    #[validate(custom = "validate_not_blank")]
    pub lugar: String,
    #[serde(default)]
    pub img: String,
}

// Request para actualizar un viaje; los campos ausentes no se tocan.
// Un `id` en el cuerpo se ignora: el que cuenta es el de la URL.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTravelRequest {
    #[validate(custom = "validate_not_blank")]
    pub ruta: Option<String>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<DecimalInput>,
    #[validate(custom = "validate_not_blank")]
    pub lugar: Option<String>,
    pub img: Option<String>,
}

// Response del borrado
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub mensaje: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            mensaje: "elemento borrado correctamente".to_string(),
        }
    }
}

// Response del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub travels: usize,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_text_or_number_precio() {
        let from_text: CreateTravelRequest = serde_json::from_value(json!({
            "ruta": "madrid", "lugar": "Madrid", "precio": "80"
        }))
        .unwrap();
        assert_eq!(from_text.precio, DecimalInput::Text("80".to_string()));
        assert_eq!(from_text.nombre, "");

        let from_number: CreateTravelRequest = serde_json::from_value(json!({
            "ruta": "madrid", "lugar": "Madrid", "precio": 80
        }))
        .unwrap();
        assert_eq!(from_number.precio.to_decimal(), Some(80.0));
    }

    #[test]
    fn test_create_request_rejects_blank_lugar() {
        let request: CreateTravelRequest = serde_json::from_value(json!({
            "ruta": "madrid", "lugar": "  ", "precio": "80"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_ignores_body_id() {
        let request: UpdateTravelRequest = serde_json::from_value(json!({
            "id": "otro", "nombre": "Nuevo nombre"
        }))
        .unwrap();
        assert_eq!(request.nombre.as_deref(), Some("Nuevo nombre"));
        assert!(request.ruta.is_none());
        assert!(request.validate().is_ok());
    }
}
