//! Tabla de rutas por viaje
//!
//! Al arrancar se asocia el `ruta` de cada viaje con su `id`. La tabla no
//! cambia después: un viaje creado más tarde no tiene ruta propia hasta el
//! siguiente arranque, y cambiar el `ruta` de un viaje no mueve su ruta.
//! Como se guarda el `id` y no una copia, la página siempre muestra los
//! datos actuales del viaje.

use std::collections::HashMap;

use crate::models::travel::Travel;

/// Rutas fijas de la aplicación; tienen prioridad sobre las de los viajes
pub const RESERVED_PATHS: [&str; 3] = ["/admin", "/insert", "/health"];
const RESERVED_PREFIXES: [&str; 2] = ["/delete/", "/update/"];

/// `true` si la ruta la atiende ya un endpoint fijo
pub fn is_reserved_path(ruta: &str) -> bool {
    RESERVED_PATHS.contains(&ruta) || RESERVED_PREFIXES.iter().any(|prefix| ruta.starts_with(prefix))
}

#[derive(Debug, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Construir la tabla desde el catálogo ya ordenado.
    /// Si dos viajes comparten `ruta`, se queda el primero. Las rutas que
    /// coinciden con un endpoint fijo no se registran.
    pub fn build(travels: &[Travel]) -> Self {
        let mut routes = HashMap::with_capacity(travels.len());

        for travel in travels {
            if is_reserved_path(&travel.ruta) {
                log::warn!(
                    "⚠️ La ruta '{}' del viaje {} coincide con un endpoint fijo, no se registra",
                    travel.ruta,
                    travel.id
                );
                continue;
            }
            if routes.contains_key(&travel.ruta) {
                log::warn!("⚠️ Ruta duplicada '{}', se ignora el viaje {}", travel.ruta, travel.id);
                continue;
            }
            routes.insert(travel.ruta.clone(), travel.id.clone());
        }

        Self { routes }
    }

    /// `id` del viaje registrado para esa ruta.
    /// Acepta la ruta tal cual o con caracteres codificados (`%C3%A1`).
    pub fn resolve(&self, path: &str) -> Option<&str> {
        if let Some(id) = self.routes.get(path) {
            return Some(id.as_str());
        }

        let decoded = urlencoding::decode(path).ok()?;
        self.routes.get(&*decoded).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
