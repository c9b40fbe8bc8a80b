//! Modelo de Travel
//!
//! Este módulo contiene el struct Travel tal y como se guarda en el snapshot
//! JSON (`id, ruta, nombre, descripcion, precio, lugar, img`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::validation::parse_decimal;

/// Oferta de viaje del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Travel {
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    pub ruta: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    /// `NaN` se escribe como `null` en el snapshot, `100.0` como `100`
    #[serde(
        serialize_with = "whole_as_integer",
        deserialize_with = "lenient_decimal",
        default = "not_a_number"
    )]
    pub precio: f64,
    pub lugar: String,
    #[serde(default)]
    pub img: String,
}

impl Travel {
    /// Precio listo para mostrar en las vistas
    pub fn precio_label(&self) -> String {
        if self.precio.is_finite() {
            format!("{}", self.precio)
        } else {
            "—".to_string()
        }
    }
}

/// Valor decimal recibido como número JSON o como texto de formulario
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DecimalInput {
    Number(f64),
    Text(String),
}

impl DecimalInput {
    /// Coerción a decimal; `None` si el texto no empieza por un número
    pub fn to_decimal(&self) -> Option<f64> {
        match self {
            DecimalInput::Number(n) => Some(*n),
            DecimalInput::Text(s) => parse_decimal(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(serde_json::Number),
}

// Los ids siempre se manejan como texto, aunque el snapshot traiga números
fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DecimalInput>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.to_decimal()).unwrap_or(f64::NAN))
}

fn not_a_number() -> f64 {
    f64::NAN
}

/// Mayor entero representable sin pérdida en un f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
