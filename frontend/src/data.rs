use medibook_shared::{default_specialities, SpecialityCatalog};

use crate::config::SPECIALITY_CATALOG_JSON;

/// Speciality catalog bundled with the app.
///
/// A rejected bundle is logged and replaced by the built-in list so the
/// landing page always renders.
pub fn speciality_catalog() -> SpecialityCatalog {
    match SpecialityCatalog::from_json(SPECIALITY_CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Bundled speciality catalog rejected, using built-in list: {e}");
            default_specialities()
        },
    }
}
