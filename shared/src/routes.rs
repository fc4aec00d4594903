//! Destinations the landing components navigate to.

/// Landing page.
pub const HOME_PATH: &str = "/";
/// Sign-in / account creation page.
pub const LOGIN_PATH: &str = "/login";
/// Unfiltered doctor listing.
pub const DOCTORS_PATH: &str = "/doctors";
/// Element id of the speciality section, target of the header's in-page anchor.
pub const SPECIALITY_ANCHOR: &str = "speciality";

/// Listing filtered by one speciality.
///
/// The name becomes a single percent-encoded path segment, so spaces and
/// `/` inside a name cannot change the shape of the route.
pub fn speciality_path(speciality: &str) -> String {
    format!("{DOCTORS_PATH}/{}", urlencoding::encode(speciality))
}

/// `href` for the in-page jump to the speciality section.
pub fn speciality_anchor_href() -> String {
    format!("#{SPECIALITY_ANCHOR}")
}

/// Every navigation a landing component can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// "Create account" on the promotional banner.
    CreateAccount,
    /// "Find doctors" style calls to action.
    FindDoctors,
    /// "Browse all" under the speciality grid.
    BrowseAll,
    /// A speciality tile was activated.
    Speciality(String),
}

impl NavigationAction {
    /// Destination path for this action.
    pub fn path(&self) -> String {
        match self {
            NavigationAction::CreateAccount => LOGIN_PATH.to_string(),
            NavigationAction::FindDoctors | NavigationAction::BrowseAll => {
                DOCTORS_PATH.to_string()
            },
            NavigationAction::Speciality(name) => speciality_path(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_speciality_is_substituted_verbatim() {
        assert_eq!(speciality_path("Neurologist"), "/doctors/Neurologist");
    }

    #[test]
    fn unsafe_characters_stay_inside_one_segment() {
        assert_eq!(speciality_path("General physician"), "/doctors/General%20physician");
        assert_eq!(speciality_path("Ear/Nose"), "/doctors/Ear%2FNose");
    }

    #[test]
    fn literal_percent_sequences_are_escaped() {
        assert_eq!(speciality_path("A%20B"), "/doctors/A%2520B");
    }

    #[test]
    fn actions_map_to_their_destinations() {
        assert_eq!(NavigationAction::CreateAccount.path(), "/login");
        assert_eq!(NavigationAction::FindDoctors.path(), "/doctors");
        assert_eq!(NavigationAction::BrowseAll.path(), "/doctors");
        assert_eq!(
            NavigationAction::Speciality("Dermatologist".to_string()).path(),
            "/doctors/Dermatologist"
        );
        assert_eq!(speciality_anchor_href(), "#speciality");
    }
}
