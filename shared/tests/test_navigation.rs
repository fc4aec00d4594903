//! Navigation requests issued by the landing actions.

#[cfg(test)]
mod tests {
    use medibook_shared::{
        default_specialities, dispatch, NavigationAction, NavigationRequest, RecordingNavigator,
        SpecialityCatalog,
    };

    fn navigate(path: &str) -> NavigationRequest {
        NavigationRequest::Navigate(path.to_string())
    }

    #[test]
    fn speciality_tile_navigates_then_scrolls_once() {
        let navigator = RecordingNavigator::new();
        dispatch(&navigator, &NavigationAction::Speciality("Neurologist".to_string()));

        assert_eq!(navigator.requests(), vec![
            navigate("/doctors/Neurologist"),
            NavigationRequest::ScrollToTop,
        ]);
    }

    #[test]
    fn create_account_targets_login_on_every_invocation() {
        let navigator = RecordingNavigator::new();
        dispatch(&navigator, &NavigationAction::CreateAccount);
        dispatch(&navigator, &NavigationAction::CreateAccount);

        assert_eq!(navigator.requests(), vec![
            navigate("/login"),
            NavigationRequest::ScrollToTop,
            navigate("/login"),
            NavigationRequest::ScrollToTop,
        ]);
    }

    #[test]
    fn find_doctors_and_browse_all_share_the_unfiltered_listing() {
        let navigator = RecordingNavigator::new();
        dispatch(&navigator, &NavigationAction::FindDoctors);
        let find = navigator.take();
        dispatch(&navigator, &NavigationAction::BrowseAll);
        let browse = navigator.take();

        assert_eq!(find, browse);
        assert_eq!(find, vec![navigate("/doctors"), NavigationRequest::ScrollToTop]);
    }

    #[test]
    fn browse_all_works_with_an_empty_catalog() {
        let catalog = SpecialityCatalog::new(Vec::new()).expect("empty catalog");
        assert!(catalog.entries().is_empty());

        let navigator = RecordingNavigator::new();
        dispatch(&navigator, &NavigationAction::BrowseAll);
        assert_eq!(navigator.requests().first(), Some(&navigate("/doctors")));
    }

    #[test]
    fn every_built_in_tile_gets_its_own_route() {
        let navigator = RecordingNavigator::new();
        for entry in default_specialities().entries() {
            dispatch(&navigator, &NavigationAction::Speciality(entry.speciality.clone()));
        }

        let paths: Vec<String> = navigator
            .requests()
            .into_iter()
            .filter_map(|request| match request {
                NavigationRequest::Navigate(path) => Some(path),
                NavigationRequest::ScrollToTop => None,
            })
            .collect();
        assert_eq!(paths, vec![
            "/doctors/General%20physician",
            "/doctors/Gynecologist",
            "/doctors/Dermatologist",
            "/doctors/Pediatricians",
            "/doctors/Neurologist",
            "/doctors/Gastroenterologist",
        ]);
    }
}
