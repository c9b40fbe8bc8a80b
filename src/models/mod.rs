//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al snapshot JSON del catálogo.

pub mod travel;

pub use travel::*;
