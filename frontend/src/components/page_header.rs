use medibook_shared::{routes::speciality_anchor_href, NavigationAction};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::asset_path,
    i18n::current::page_header as t,
    navigation_context::use_app_navigator,
};

#[function_component(PageHeader)]
pub fn page_header() -> Html {
    let navigator = use_app_navigator();
    let on_find_doctors = navigator.on_click(NavigationAction::FindDoctors);

    let cta_class = classes!(
        "inline-flex",
        "items-center",
        "gap-2",
        "px-8",
        "py-3",
        "rounded-full",
        "text-sm",
        "transition-all",
        "duration-300",
        "hover:scale-105"
    );

    html! {
        <header class={classes!(
            "flex", "flex-col", "md:flex-row", "flex-wrap",
            "bg-primary", "rounded-lg", "px-6", "md:px-10", "lg:px-20"
        )}>
            // Left: headline and calls to action
            <div class={classes!(
                "md:w-1/2", "flex", "flex-col", "items-start", "justify-center",
                "gap-4", "py-10", "m-auto", "md:py-[10vw]", "md:mb-[-30px]"
            )}>
                <h1 class={classes!(
                    "text-3xl", "md:text-4xl", "lg:text-5xl", "text-white",
                    "font-semibold", "leading-tight", "md:leading-tight", "lg:leading-tight"
                )}>
                    { t::TITLE_LINE_1 }<br />{ t::TITLE_LINE_2 }
                </h1>
                <div class={classes!(
                    "flex", "flex-col", "md:flex-row", "items-center",
                    "gap-3", "text-white", "text-sm", "font-light"
                )}>
                    <img
                        class="w-28"
                        src={asset_path("static/assets/group_profiles.png")}
                        alt={t::GROUP_PROFILES_ALT}
                    />
                    <p>{ t::SUBTITLE }</p>
                </div>
                <div class={classes!("flex", "flex-wrap", "gap-3")}>
                    // Plain anchor: the browser scrolls to the speciality section itself.
                    <a
                        href={speciality_anchor_href()}
                        class={classes!(cta_class.clone(), "bg-white", "text-gray-600")}
                    >
                        <Icon name={IconName::Calendar} size={16} />
                        { t::BOOK_APPOINTMENT }
                    </a>
                    <button
                        type="button"
                        onclick={on_find_doctors}
                        class={classes!(cta_class, "border", "border-white", "text-white")}
                    >
                        { t::FIND_DOCTORS }
                        <Icon name={IconName::ArrowRight} size={16} />
                    </button>
                </div>
            </div>

            // Right: illustration
            <div class={classes!("md:w-1/2", "relative")}>
                <img
                    class={classes!("w-full", "md:absolute", "bottom-0", "h-auto", "rounded-lg")}
                    src={asset_path("static/assets/header_img.png")}
                    alt={t::HEADER_IMAGE_ALT}
                />
            </div>
        </header>
    }
}
