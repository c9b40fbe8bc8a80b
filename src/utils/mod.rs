//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y comparación de textos.

pub mod collation;
pub mod errors;
pub mod validation;
