//! Services module
//!
//! Este módulo contiene la lógica de negocio del catálogo: las operaciones
//! sobre la colección y el store que las mantiene sincronizadas con disco.

pub mod catalog_service;

pub use catalog_service::*;
