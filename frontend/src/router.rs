use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::navbar::NavBar, navigation_context::NavigatorProvider, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/medibook/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/doctors")]
    Doctors,
    #[cfg(feature = "mock")]
    #[at("/medibook/doctors")]
    Doctors,

    #[cfg(not(feature = "mock"))]
    #[at("/doctors/:speciality")]
    DoctorsBySpeciality { speciality: String },
    #[cfg(feature = "mock")]
    #[at("/medibook/doctors/:speciality")]
    DoctorsBySpeciality { speciality: String },

    #[cfg(not(feature = "mock"))]
    #[at("/login")]
    Login,
    #[cfg(feature = "mock")]
    #[at("/medibook/login")]
    Login,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/medibook/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Doctors => html! { <pages::doctors::DoctorsPage /> },
        Route::DoctorsBySpeciality {
            speciality,
        } => {
            html! { <pages::doctors::DoctorsPage speciality={Some(AttrValue::from(speciality))} /> }
        },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <NavigatorProvider>
                <div class={classes!("mx-4", "sm:mx-[10%]")} style="min-height: 100vh; min-height: 100svh;">
                    <NavBar />
                    <Switch<Route> render={switch} />
                </div>
            </NavigatorProvider>
        </BrowserRouter>
    }
}

#[cfg(all(test, not(feature = "mock")))]
mod tests {
    use medibook_shared::{routes, NavigationAction};

    use super::*;

    #[test]
    fn navigation_targets_resolve_to_routes() {
        assert_eq!(Route::recognize(&NavigationAction::CreateAccount.path()), Some(Route::Login));
        assert_eq!(Route::recognize(&NavigationAction::BrowseAll.path()), Some(Route::Doctors));
        assert_eq!(Route::recognize(routes::HOME_PATH), Some(Route::Home));
        assert_eq!(
            Route::recognize(&NavigationAction::Speciality("Neurologist".to_string()).path()),
            Some(Route::DoctorsBySpeciality {
                speciality: "Neurologist".to_string(),
            })
        );
    }

    #[test]
    fn speciality_names_survive_one_encode_decode_cycle() {
        for name in ["A%20B", "General physician", "Ear/Nose", "100% care"] {
            let path = NavigationAction::Speciality(name.to_string()).path();
            assert_eq!(
                Route::recognize(&path),
                Some(Route::DoctorsBySpeciality {
                    speciality: name.to_string(),
                }),
                "route for {name:?}"
            );
        }
    }
}
