use medibook_shared::NavigationAction;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconButton, IconName},
    i18n::current::{common as common_text, navbar as t},
    navigation_context::use_app_navigator,
    router::Route,
};

#[function_component(NavBar)]
pub fn navbar() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();
    let navigator = use_app_navigator();

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(false))
    };

    let on_create_account = navigator.on_click(NavigationAction::CreateAccount);
    let on_mobile_create_account = {
        let on_create_account = on_create_account.clone();
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            mobile_menu_open.set(false);
            on_create_account.emit(event);
        })
    };

    let nav_items = [(t::NAV_HOME, Route::Home), (t::NAV_ALL_DOCTORS, Route::Doctors)];
    let is_active = |target: &Route| match (&route, target) {
        (Some(Route::DoctorsBySpeciality { .. }), Route::Doctors) => true,
        (Some(current), target) => current == target,
        (None, _) => false,
    };

    let mobile_menu_classes = classes!(
        "md:hidden",
        "fixed",
        "inset-0",
        "z-20",
        "bg-white",
        "flex",
        "flex-col",
        "gap-4",
        "p-6",
        "transition-opacity",
        "duration-300",
        if *mobile_menu_open {
            "opacity-100 pointer-events-auto"
        } else {
            "opacity-0 pointer-events-none"
        }
    );

    html! {
        <>
            <div class={classes!(
                "flex", "items-center", "justify-between", "text-sm",
                "py-4", "mb-5", "border-b", "border-b-gray-400"
            )}>
                // Brand
                <Link<Route> to={Route::Home} classes={classes!(
                    "inline-flex", "items-center", "gap-2", "text-xl", "font-semibold", "text-primary"
                )}>
                    <Icon name={IconName::Stethoscope} size={28} />
                    { common_text::BRAND_NAME }
                </Link<Route>>

                // Desktop navigation
                <nav aria-label={t::NAV_MAIN_ARIA}>
                    <ul class={classes!("hidden", "md:flex", "items-start", "gap-5", "font-medium")}>
                        { for nav_items.iter().map(|(label, target)| {
                            html! {
                                <li>
                                    <Link<Route> to={target.clone()} classes={classes!(
                                        "py-1",
                                        if is_active(target) { "border-b-2 border-primary" } else { "" }
                                    )}>
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>

                <div class={classes!("flex", "items-center", "gap-4")}>
                    <button
                        type="button"
                        onclick={on_create_account}
                        class={classes!(
                            "hidden", "md:block", "bg-primary", "text-white",
                            "px-8", "py-3", "rounded-full", "font-light"
                        )}
                    >
                        { t::CREATE_ACCOUNT }
                    </button>
                    <IconButton
                        icon={IconName::Menu}
                        label={t::OPEN_MENU_ARIA}
                        expanded={Some(*mobile_menu_open)}
                        onclick={toggle_mobile_menu}
                        class={classes!("md:hidden")}
                    />
                </div>
            </div>

            // Mobile menu overlay
            <div class={mobile_menu_classes} role="dialog" aria-modal="true">
                <div class={classes!("flex", "items-center", "justify-between")}>
                    <span class={classes!("text-xl", "font-semibold", "text-primary")}>
                        { common_text::BRAND_NAME }
                    </span>
                    <IconButton
                        icon={IconName::X}
                        label={t::CLOSE_MENU_ARIA}
                        onclick={close_mobile_menu.clone()}
                    />
                </div>
                <nav aria-label={t::MOBILE_NAV_ARIA}>
                    <ul class={classes!("flex", "flex-col", "items-center", "gap-2", "mt-5", "text-lg", "font-medium")}>
                        { for nav_items.iter().map(|(label, target)| {
                            let close_cb = close_mobile_menu.clone();
                            html! {
                                <li onclick={close_cb}>
                                    <Link<Route> to={target.clone()} classes={classes!("px-4", "py-2", "rounded", "inline-block")}>
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
                <button
                    type="button"
                    onclick={on_mobile_create_account}
                    class={classes!("bg-primary", "text-white", "px-8", "py-3", "rounded-full", "mt-4")}
                >
                    { t::CREATE_ACCOUNT }
                </button>
            </div>
        </>
    }
}
