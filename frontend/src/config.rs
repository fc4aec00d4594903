//! Configuration for the frontend application

/// Base URL for static assets and routes
/// - For local development: "/"
/// - For static hosting under a sub-path: "/medibook/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/medibook/";

/// Delay between the first paint and the banner's entrance flip.
pub const ENTRANCE_DELAY_MS: u32 = 50;

/// Speciality catalog shipped with the bundle.
pub const SPECIALITY_CATALOG_JSON: &str = include_str!("../static/specialities.json");

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

/// Prefix an application route with the deployment base.
pub fn route_path(path: &str) -> String {
    let base = BASE_URL.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(all(test, not(feature = "mock")))]
mod tests {
    use super::*;

    #[test]
    fn asset_path_strips_leading_slash() {
        assert_eq!(asset_path("/static/assets/logo.svg"), "/static/assets/logo.svg");
        assert_eq!(asset_path("static/assets/logo.svg"), "/static/assets/logo.svg");
    }

    #[test]
    fn route_path_is_identity_at_root() {
        assert_eq!(route_path("/doctors/Neurologist"), "/doctors/Neurologist");
        assert_eq!(route_path("login"), "/login");
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = medibook_shared::SpecialityCatalog::from_json(SPECIALITY_CATALOG_JSON)
            .expect("bundled catalog");
        assert_eq!(catalog, medibook_shared::default_specialities());
    }
}
