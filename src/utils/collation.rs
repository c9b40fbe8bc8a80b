//! Comparación de textos en español
//!
//! Orden alfabético "humano" para el campo `lugar` con el collator de ICU4X
//! (locale `es`, segmentos numéricos por valor): la `ñ` va entre la `n` y la
//! `o`, los acentos y la caja sólo desempatan, "Destino 2" < "Destino 10" y
//! el texto en NFD ordena igual que el mismo texto en NFC.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Numeric};
use icu_locid::locale;

thread_local! {
    static COLLATOR_ES: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.numeric = Some(Numeric::On);

    match Collator::try_new(&locale!("es").into(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            log::error!("❌ No se pudo crear el collator 'es', se ordenará por bytes: {}", e);
            None
        }
    }
}

/// Comparar dos textos con orden español y numérico.
///
/// Si el collator considera iguales ambos textos ("Ruta 007" y "Ruta 7",
/// NFC y NFD) se desempata por bytes para que el orden sea total.
pub fn compare_es(a: &str, b: &str) -> Ordering {
    COLLATOR_ES
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
