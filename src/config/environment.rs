//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Los valores se leen
//! después de `dotenvy::dotenv()`, así que un `.env` local también cuenta.

use std::env;
use std::path::PathBuf;

use crate::utils::errors::{AppError, AppResult};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Ruta del snapshot JSON con todos los viajes
    pub data_file: PathBuf,
    /// Carpeta de archivos estáticos (css, js, imágenes)
    pub public_dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            data_file: PathBuf::from("data/travels.json"),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde el entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::Internal(format!("PORT must be a valid number, got '{}'", raw))
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        })
    }

    /// Configuración para tests: snapshot y estáticos en rutas explícitas
    pub fn for_testing(data_file: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            environment: "test".to_string(),
            data_file: data_file.into(),
            public_dir: public_dir.into(),
            ..Self::default()
        }
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
