//! Repositorio del snapshot JSON
//!
//! El catálogo completo vive en un único archivo JSON que se reescribe
//! entero en cada mutación.

use std::path::PathBuf;

use crate::models::travel::Travel;
use crate::utils::errors::{storage_error, AppResult};

pub struct TravelRepository {
    path: PathBuf,
}

impl TravelRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Leer el snapshot tal y como está en disco (sin ordenar)
    pub async fn read_all(&self) -> AppResult<Vec<Travel>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| storage_error(&self.path, e))?;

        let travels: Vec<Travel> = serde_json::from_str(&raw)?;
        log::info!("📂 {} viajes leídos de {}", travels.len(), self.path.display());
        Ok(travels)
    }

    /// Reescribir el snapshot completo (JSON con indentación de 2 espacios)
    pub async fn write_all(&self, travels: &[Travel]) -> AppResult<()> {
        let body = serde_json::to_string_pretty(travels)?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| storage_error(&self.path, e))?;

        log::debug!("💾 Snapshot guardado: {} viajes en {}", travels.len(), self.path.display());
        Ok(())
    }
}
