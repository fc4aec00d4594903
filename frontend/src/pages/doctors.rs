use medibook_shared::NavigationAction;
use yew::prelude::*;

use crate::{
    data::speciality_catalog,
    i18n::{current::doctors_page as t, fill_one},
    navigation_context::use_app_navigator,
};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub speciality: Option<AttrValue>,
}

/// Doctor listing shell with the speciality filter column.
#[function_component(DoctorsPage)]
pub fn doctors_page(props: &Props) -> Html {
    let navigator = use_app_navigator();
    let catalog = use_memo((), |_| speciality_catalog());
    // The router hands over the already decoded name.
    let selected = props.speciality.as_deref();

    let chip_class = classes!(
        "w-[94vw]",
        "sm:w-auto",
        "pl-3",
        "py-1.5",
        "pr-16",
        "border",
        "border-gray-300",
        "rounded",
        "transition-all",
        "cursor-pointer"
    );

    html! {
        <main>
            <p class="text-gray-600">{ t::TITLE }</p>
            <div class={classes!("flex", "flex-col", "sm:flex-row", "items-start", "gap-5", "mt-5")}>
                <div class={classes!("flex", "flex-col", "gap-4", "text-sm", "text-gray-600")}>
                    <button
                        type="button"
                        onclick={navigator.on_click(NavigationAction::BrowseAll)}
                        class={classes!(
                            chip_class.clone(),
                            if selected.is_none() { "bg-indigo-100 text-black" } else { "" }
                        )}
                    >
                        { t::ALL_SPECIALITIES }
                    </button>
                    { for catalog.entries().iter().map(|entry| {
                        let active = selected == Some(entry.speciality.as_str());
                        // Clicking the active filter again clears it.
                        let action = if active {
                            NavigationAction::BrowseAll
                        } else {
                            NavigationAction::Speciality(entry.speciality.clone())
                        };
                        html! {
                            <button
                                key={entry.speciality.clone()}
                                type="button"
                                onclick={navigator.on_click(action)}
                                class={classes!(
                                    chip_class.clone(),
                                    if active { "bg-indigo-100 text-black" } else { "" }
                                )}
                            >
                                { &entry.speciality }
                            </button>
                        }
                    }) }
                </div>
                <section class={classes!("w-full", "text-gray-600")}>
                    {
                        if let Some(name) = selected {
                            html! { <h2 class={classes!("text-lg", "font-medium", "mb-3")}>{ fill_one(t::FILTER_TEMPLATE, name) }</h2> }
                        } else {
                            html! {}
                        }
                    }
                    <p>{ t::EMPTY }</p>
                </section>
            </div>
        </main>
    }
}
