use medibook_shared::{
    routes::{speciality_path, SPECIALITY_ANCHOR},
    NavigationAction, SpecialityCatalog,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::{asset_path, route_path},
    hooks::use_hover_tracker,
    i18n::current::speciality_menu as t,
    navigation_context::use_app_navigator,
};

#[derive(Properties, PartialEq, Clone)]
pub struct SpecialityMenuProps {
    pub catalog: SpecialityCatalog,
}

/// Trailing action under the grid, rendered whatever the catalog holds.
const BROWSE_ALL_ACTION: NavigationAction = NavigationAction::BrowseAll;

/// One action per tile, in display order.
fn tile_actions(catalog: &SpecialityCatalog) -> Vec<NavigationAction> {
    catalog
        .entries()
        .iter()
        .map(|entry| NavigationAction::Speciality(entry.speciality.clone()))
        .collect()
}

/// Grid of speciality tiles, each linking to its filtered doctor listing.
#[function_component(SpecialityMenu)]
pub fn speciality_menu(props: &SpecialityMenuProps) -> Html {
    let navigator = use_app_navigator();
    let (hover, on_enter, on_leave) = use_hover_tracker(props.catalog.len());

    let on_browse_all = navigator.on_click(BROWSE_ALL_ACTION);

    let actions = tile_actions(&props.catalog);
    let tiles = props
        .catalog
        .entries()
        .iter()
        .zip(actions)
        .enumerate()
        .map(|(index, (entry, action))| {
            let onclick = navigator.on_click(action);
            let onmouseenter = on_enter.reform(move |_: MouseEvent| index);
            let onmouseleave = on_leave.reform(move |_: MouseEvent| index);
            let hovered = hover.is_hovered(index);
    
            html! {
                <a
                    key={entry.speciality.clone()}
                    href={route_path(&speciality_path(&entry.speciality))}
                    {onclick}
                    {onmouseenter}
                    {onmouseleave}
                    class={classes!(
                        "flex", "flex-col", "items-center", "text-xs",
                        "cursor-pointer", "flex-shrink-0",
                        "transition-all", "duration-500",
                        if hovered { "-translate-y-2.5" } else { "translate-y-0" }
                    )}
                >
                    <img
                        class={classes!(
                            "w-16", "sm:w-24", "mb-2", "transition-transform", "duration-300",
                            if hovered { "scale-110" } else { "scale-100" }
                        )}
                        src={asset_path(&format!("static/assets/{}", entry.image))}
                        alt={entry.speciality.clone()}
                    />
                    <p class={classes!(if hovered { "text-primary" } else { "text-gray-800" })}>
                        { &entry.speciality }
                    </p>
                </a>
            }
        });

    html! {
        <section
            id={SPECIALITY_ANCHOR}
            class={classes!("flex", "flex-col", "items-center", "gap-4", "py-16", "text-gray-800")}
        >
            <h2 class={classes!("text-3xl", "font-medium")}>{ t::TITLE }</h2>
            <p class={classes!("sm:w-1/3", "text-center", "text-sm")}>{ t::SUBTITLE }</p>
            <nav
                aria-label={t::GRID_ARIA}
                class={classes!(
                    "flex", "sm:justify-center", "gap-4", "pt-5", "w-full", "overflow-x-auto"
                )}
            >
                { for tiles }
            </nav>
            <button
                type="button"
                onclick={on_browse_all}
                class={classes!(
                    "inline-flex", "items-center", "gap-2",
                    "bg-blue-50", "text-gray-600", "px-12", "py-3", "rounded-full", "mt-6",
                    "transition-colors", "hover:bg-blue-100"
                )}
            >
                { t::BROWSE_ALL }
                <Icon name={IconName::ChevronRight} size={16} />
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use medibook_shared::{default_specialities, SpecialityEntry};

    use super::*;

    #[test]
    fn empty_catalog_has_no_tiles_but_keeps_browse_all() {
        let catalog = SpecialityCatalog::new(Vec::new()).expect("empty catalog");
        assert!(tile_actions(&catalog).is_empty());
        assert_eq!(BROWSE_ALL_ACTION.path(), "/doctors");
    }

    #[test]
    fn each_tile_targets_its_own_speciality() {
        let catalog = SpecialityCatalog::new(vec![
            SpecialityEntry::new("Neurologist", "n.svg"),
            SpecialityEntry::new("General physician", "g.svg"),
        ])
        .expect("catalog");

        assert_eq!(tile_actions(&catalog), vec![
            NavigationAction::Speciality("Neurologist".to_string()),
            NavigationAction::Speciality("General physician".to_string()),
        ]);
    }

    #[test]
    fn built_in_grid_has_one_action_per_entry() {
        let catalog = default_specialities();
        assert_eq!(tile_actions(&catalog).len(), catalog.len());
    }
}
