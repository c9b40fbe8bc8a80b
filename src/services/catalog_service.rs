//! Servicio del catálogo de viajes
//!
//! Operaciones sobre la colección en memoria (insertar, borrar, actualizar,
//! ordenar) y `CatalogStore`, que las combina con el snapshot en disco:
//! cada mutación cambia primero la memoria y después reescribe el archivo.

use uuid::Uuid;

use crate::dto::travel_dto::{CreateTravelRequest, UpdateTravelRequest};
use crate::models::travel::{DecimalInput, Travel};
use crate::repositories::travel_repository::TravelRepository;
use crate::utils::collation::compare_es;
use crate::utils::errors::{invalid_record_error, AppResult};
use crate::utils::validation::normalize_ruta;

/// Campos editables de un viaje (`id` nunca se actualiza)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelField {
    Ruta,
    Nombre,
    Descripcion,
    Precio,
    Lugar,
    Img,
}

/// Cómo se copia un campo del patch al registro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Copy,
    NormalizeRuta,
    CoerceDecimal,
}

/// Tabla de reglas de actualización
pub const UPDATE_RULES: [(TravelField, FieldRule); 6] = [
    (TravelField::Ruta, FieldRule::NormalizeRuta),
    (TravelField::Nombre, FieldRule::Copy),
    (TravelField::Descripcion, FieldRule::Copy),
    (TravelField::Precio, FieldRule::CoerceDecimal),
    (TravelField::Lugar, FieldRule::Copy),
    (TravelField::Img, FieldRule::Copy),
];

/// Ordenar por `lugar` (orden español, números por valor)
pub fn sort_by_lugar(travels: &mut [Travel]) {
    travels.sort_by(|a, b| compare_es(&a.lugar, &b.lugar));
}

fn coerce_precio(input: &DecimalInput) -> AppResult<f64> {
    // inf no sobrevive al snapshot (se escribe como null)
    input
        .to_decimal()
        .filter(|n| n.is_finite())
        .ok_or_else(|| invalid_record_error("precio", "must be a finite number"))
}

fn fresh_id(travels: &[Travel]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !travels.iter().any(|t| t.id == id) {
            return id;
        }
    }
}

/// Añadir un viaje nuevo al final de la colección (sin reordenar).
///
/// Normaliza `ruta`, convierte `precio` a decimal y asigna un `id` nuevo.
pub fn insert_item(travels: &mut Vec<Travel>, request: CreateTravelRequest) -> AppResult<&Travel> {
    let precio = coerce_precio(&request.precio)?;

    let travel = Travel {
        id: fresh_id(travels),
        ruta: normalize_ruta(&request.ruta),
        nombre: request.nombre,
        descripcion: request.descripcion,
        precio,
        lugar: request.lugar,
        img: request.img,
    };

    travels.push(travel);
    Ok(&travels[travels.len() - 1])
}

/// Nueva colección sin los viajes con ese `id`; la original no se toca
pub fn delete_item(travels: &[Travel], id: &str) -> Vec<Travel> {
    travels.iter().filter(|t| t.id != id).cloned().collect()
}

/// Aplicar un patch al primer viaje con ese `id`.
///
/// Devuelve `false` si no existe ninguno. Los campos ausentes en el patch
/// se dejan como estaban.
pub fn update_item(travels: &mut [Travel], id: &str, patch: &UpdateTravelRequest) -> AppResult<bool> {
    // Validar antes de tocar nada
    let precio = patch.precio.as_ref().map(coerce_precio).transpose()?;

    let Some(travel) = travels.iter_mut().find(|t| t.id == id) else {
        return Ok(false);
    };

    for (field, rule) in UPDATE_RULES {
        let target = match field {
            TravelField::Ruta => (&mut travel.ruta, patch.ruta.as_ref()),
            TravelField::Nombre => (&mut travel.nombre, patch.nombre.as_ref()),
            TravelField::Descripcion => (&mut travel.descripcion, patch.descripcion.as_ref()),
            TravelField::Lugar => (&mut travel.lugar, patch.lugar.as_ref()),
            TravelField::Img => (&mut travel.img, patch.img.as_ref()),
            TravelField::Precio => {
                if let Some(value) = precio {
                    travel.precio = value;
                }
                continue;
            }
        };

        if let (slot, Some(value)) = target {
            *slot = match rule {
                FieldRule::NormalizeRuta => normalize_ruta(value),
                FieldRule::Copy | FieldRule::CoerceDecimal => value.clone(),
            };
        }
    }

    Ok(true)
}

/// Dueño único de la colección en memoria y de su snapshot en disco
pub struct CatalogStore {
    repository: TravelRepository,
    travels: Vec<Travel>,
}

impl CatalogStore {
    /// Cargar y ordenar el catálogo. Un snapshot ausente o ilegible es error.
    pub async fn load(repository: TravelRepository) -> AppResult<Self> {
        let mut travels = repository.read_all().await?;
        sort_by_lugar(&mut travels);

        log::info!("✅ Catálogo cargado: {} viajes", travels.len());
        Ok(Self { repository, travels })
    }

    pub fn travels(&self) -> &[Travel] {
        &self.travels
    }

    pub fn len(&self) -> usize {
        self.travels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travels.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Travel> {
        self.travels.iter().find(|t| t.id == id)
    }

    /// Reescribir el snapshot con el estado actual
    pub async fn persist(&self) -> AppResult<()> {
        self.repository.write_all(&self.travels).await
    }

    /// Insertar y guardar; devuelve una copia del viaje creado
    pub async fn insert(&mut self, request: CreateTravelRequest) -> AppResult<Travel> {
        let created = insert_item(&mut self.travels, request)?.clone();
        log::info!("➕ Viaje creado: {} ({})", created.ruta, created.id);

        self.persist().await?;
        Ok(created)
    }

    /// Borrar y guardar; `false` si el id no existía (igualmente se guarda)
    pub async fn delete(&mut self, id: &str) -> AppResult<bool> {
        let remaining = delete_item(&self.travels, id);
        let removed = remaining.len() != self.travels.len();
        self.travels = remaining;

        if removed {
            log::info!("🗑️ Viaje borrado: {}", id);
        } else {
            log::warn!("⚠️ Borrado de un id inexistente: {}", id);
        }

        self.persist().await?;
        Ok(removed)
    }

    /// Actualizar y guardar; `false` si el id no existía (igualmente se guarda)
    pub async fn update(&mut self, id: &str, patch: &UpdateTravelRequest) -> AppResult<bool> {
        let updated = update_item(&mut self.travels, id, patch)?;

        if updated {
            log::info!("✏️ Viaje actualizado: {}", id);
        } else {
            log::warn!("⚠️ Actualización de un id inexistente: {}", id);
        }

        self.persist().await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use tempfile::tempdir;

    fn travel(id: &str, ruta: &str, lugar: &str, precio: f64) -> Travel {
        Travel {
            id: id.to_string(),
            ruta: ruta.to_string(),
            nombre: format!("Viaje a {}", lugar),
            descripcion: String::new(),
            precio,
            lugar: lugar.to_string(),
            img: String::new(),
        }
    }

    fn create(ruta: &str, lugar: &str, precio: DecimalInput) -> CreateTravelRequest {
        CreateTravelRequest {
            ruta: ruta.to_string(),
            nombre: "Nuevo".to_string(),
            descripcion: "Descripción".to_string(),
            precio,
            lugar: lugar.to_string(),
            img: "img.jpg".to_string(),
        }
    }

    #[test]
    fn test_sort_by_lugar() {
        let mut travels = vec![
            travel("1", "/z", "Zaragoza", 1.0),
            travel("2", "/b", "Barcelona", 1.0),
            travel("3", "/a", "Álava", 1.0),
        ];
        sort_by_lugar(&mut travels);

        let lugares: Vec<&str> = travels.iter().map(|t| t.lugar.as_str()).collect();
        assert_eq!(lugares, vec!["Álava", "Barcelona", "Zaragoza"]);
    }

    #[test]
    fn test_insert_normalizes_and_appends() {
        let mut travels = vec![travel("a", "/roma", "Roma", 100.0)];

        let created = insert_item(&mut travels, create("paris", "Paris", DecimalInput::Text("199.5".into())))
            .unwrap()
            .clone();

        assert_eq!(created.ruta, "/paris");
        assert_eq!(created.precio, 199.5);
        assert!(!created.id.is_empty());
        assert_eq!(travels.len(), 2);
        assert_eq!(travels[1], created);
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let mut travels = Vec::new();
        let first = insert_item(&mut travels, create("/a", "A", DecimalInput::Number(1.0))).unwrap().id.clone();
        let second = insert_item(&mut travels, create("/b", "B", DecimalInput::Number(2.0))).unwrap().id.clone();

        assert_ne!(first, second);
    }

    #[test]
    fn test_insert_rejects_non_numeric_precio() {
        let mut travels = vec![travel("a", "/roma", "Roma", 100.0)];

        let err = insert_item(&mut travels, create("x", "X", DecimalInput::Text("gratis".into()))).unwrap_err();

        assert!(matches!(err, AppError::InvalidRecord(_)));
        assert_eq!(travels.len(), 1);
    }

    #[test]
    fn test_insert_and_update_reject_infinite_precio() {
        let mut travels = vec![travel("a", "/roma", "Roma", 100.0)];

        for raw in ["Infinity", "-Infinity", "1e999"] {
            let err = insert_item(&mut travels, create("x", "X", DecimalInput::Text(raw.into()))).unwrap_err();
            assert!(matches!(err, AppError::InvalidRecord(_)), "{raw}");
        }
        assert_eq!(travels.len(), 1);

        let patch = UpdateTravelRequest {
            precio: Some(DecimalInput::Text("Infinity".to_string())),
            ..Default::default()
        };
        assert!(update_item(&mut travels, "a", &patch).is_err());
        assert_eq!(travels[0].precio, 100.0);
    }

    #[test]
    fn test_delete_present_and_absent() {
        let travels = vec![travel("a", "/roma", "Roma", 100.0), travel("b", "/oslo", "Oslo", 50.0)];

        let after = delete_item(&travels, "a");
        assert_eq!(after.len(), 1);
        assert!(after.iter().all(|t| t.id != "a"));
        assert_eq!(travels.len(), 2);

        let unchanged = delete_item(&travels, "zzz");
        assert_eq!(unchanged, travels);
    }

    #[test]
    fn test_update_overwrites_supplied_fields() {
        let mut travels = vec![travel("a", "/roma", "Roma", 100.0)];
        let patch = UpdateTravelRequest {
            ruta: Some("roma-clasica".to_string()),
            nombre: Some("Roma eterna".to_string()),
            precio: Some(DecimalInput::Text("120.5".to_string())),
            ..Default::default()
        };

        assert!(update_item(&mut travels, "a", &patch).unwrap());

        let t = &travels[0];
        assert_eq!(t.ruta, "/roma-clasica");
        assert_eq!(t.nombre, "Roma eterna");
        assert_eq!(t.precio, 120.5);
        assert_eq!(t.lugar, "Roma");
        assert_eq!(t.id, "a");
    }

    #[test]
    fn test_update_only_first_match() {
        let mut travels = vec![travel("dup", "/uno", "Uno", 1.0), travel("dup", "/dos", "Dos", 2.0)];
        let patch = UpdateTravelRequest {
            img: Some("nueva.jpg".to_string()),
            ..Default::default()
        };

        update_item(&mut travels, "dup", &patch).unwrap();

        assert_eq!(travels[0].img, "nueva.jpg");
        assert_eq!(travels[1].img, "");
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut travels = vec![travel("a", "/roma", "Roma", 100.0)];
        let before = travels.clone();
        let patch = UpdateTravelRequest {
            nombre: Some("X".to_string()),
            ..Default::default()
        };

        assert!(!update_item(&mut travels, "nope", &patch).unwrap());
        assert_eq!(travels, before);
    }

    #[test]
    fn test_update_invalid_precio_leaves_record_untouched() {
        let mut travels = vec![travel("a", "/roma", "Roma", 100.0)];
        let before = travels.clone();
        let patch = UpdateTravelRequest {
            nombre: Some("Cambio".to_string()),
            precio: Some(DecimalInput::Text("n/a".to_string())),
            ..Default::default()
        };

        assert!(update_item(&mut travels, "a", &patch).is_err());
        assert_eq!(travels, before);
    }

    #[test]
    fn test_rule_table_covers_every_field() {
        let fields: Vec<TravelField> = UPDATE_RULES.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields.len(), 6);
        assert!(UPDATE_RULES.contains(&(TravelField::Precio, FieldRule::CoerceDecimal)));
        assert!(UPDATE_RULES.contains(&(TravelField::Ruta, FieldRule::NormalizeRuta)));
    }

    #[tokio::test]
    async fn test_store_load_sorts_and_mutations_persist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("travels.json");
        let seed = vec![
            travel("z", "/zaragoza", "Zaragoza", 10.0),
            travel("a", "/alava", "Álava", 20.0),
        ];
        TravelRepository::new(&path).write_all(&seed).await.unwrap();

        let mut store = CatalogStore::load(TravelRepository::new(&path)).await.unwrap();
        assert_eq!(store.travels()[0].lugar, "Álava");

        let created = store
            .insert(create("bilbao", "Bilbao", DecimalInput::Text("80".into())))
            .await
            .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.travels()[2].id, created.id);

        let on_disk = TravelRepository::new(&path).read_all().await.unwrap();
        assert_eq!(on_disk, store.travels());

        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
        assert_eq!(TravelRepository::new(&path).read_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_persist_then_load_is_structurally_equal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("travels.json");
        let seed = vec![
            travel("1", "/lima", "Lima", 900.0),
            travel("2", "/cusco", "Cusco", 750.25),
        ];
        TravelRepository::new(&path).write_all(&seed).await.unwrap();

        let first = CatalogStore::load(TravelRepository::new(&path)).await.unwrap();
        first.persist().await.unwrap();
        let second = CatalogStore::load(TravelRepository::new(&path)).await.unwrap();

        assert_eq!(first.travels(), second.travels());
    }

    #[tokio::test]
    async fn test_persist_failure_keeps_memory_change() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("travels.json");
        TravelRepository::new(&path)
            .write_all(&[travel("a", "/roma", "Roma", 100.0)])
            .await
            .unwrap();
        let mut store = CatalogStore::load(TravelRepository::new(&path)).await.unwrap();

        // Un directorio en el lugar del archivo hace fallar la escritura
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = store.delete("a").await.unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
        assert!(store.is_empty());
    }
}
