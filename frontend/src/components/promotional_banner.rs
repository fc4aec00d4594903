use medibook_shared::{EntrancePhase, NavigationAction};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::asset_path,
    hooks::use_entrance_transition,
    i18n::current::banner as t,
    navigation_context::use_app_navigator,
};

/// Style state of the banner body for an entrance phase.
fn entrance_classes(phase: EntrancePhase) -> &'static str {
    match phase {
        EntrancePhase::Entering => "opacity-0 translate-y-8",
        EntrancePhase::Settled => "opacity-100 translate-y-0",
    }
}

#[function_component(PromotionalBanner)]
pub fn promotional_banner() -> Html {
    let navigator = use_app_navigator();
    let entrance = use_entrance_transition();

    let on_create_account = navigator.on_click(NavigationAction::CreateAccount);
    let on_find_doctors = navigator.on_click(NavigationAction::FindDoctors);

    let body_class = classes!(
        "flex-1",
        "py-8",
        "sm:py-10",
        "md:py-16",
        "lg:py-24",
        "lg:pl-5",
        "transition-all",
        "duration-700",
        "ease-out",
        entrance_classes(entrance.phase())
    );

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "gap-2",
        "text-sm",
        "sm:text-base",
        "px-8",
        "py-3",
        "rounded-full",
        "mt-6",
        "transition-all",
        "duration-300",
        "hover:scale-105"
    );

    html! {
        <section class={classes!(
            "flex", "bg-primary", "rounded-lg", "px-6", "sm:px-10",
            "md:px-14", "lg:px-12", "my-20", "md:mx-10", "overflow-hidden"
        )}>
            // Left side
            <div class={body_class}>
                <div class={classes!(
                    "text-xl", "sm:text-2xl", "md:text-3xl", "lg:text-5xl",
                    "font-semibold", "text-white"
                )}>
                    <p>{ t::TITLE_LINE_1 }</p>
                    <p class="mt-4">{ t::TITLE_LINE_2 }</p>
                </div>
                <div class={classes!("flex", "flex-wrap", "gap-3")}>
                    <button
                        type="button"
                        onclick={on_create_account}
                        class={classes!(button_class.clone(), "bg-white", "text-gray-600")}
                    >
                        <Icon name={IconName::UserPlus} size={18} />
                        { t::CREATE_ACCOUNT }
                    </button>
                    <button
                        type="button"
                        onclick={on_find_doctors}
                        class={classes!(button_class, "border", "border-white", "text-white")}
                    >
                        { t::FIND_DOCTORS }
                        <Icon name={IconName::ArrowRight} size={18} />
                    </button>
                </div>
            </div>

            // Right side
            <div class={classes!("hidden", "md:block", "md:w-1/2", "lg:w-[370px]", "relative")}>
                <img
                    class={classes!("w-full", "absolute", "bottom-0", "right-0", "max-w-md")}
                    src={asset_path("static/assets/appointment_img.png")}
                    alt={t::IMAGE_ALT}
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use medibook_shared::EntranceTransition;

    use super::*;

    #[test]
    fn style_states_follow_the_transition() {
        let mut entrance = EntranceTransition::new();
        assert_eq!(entrance_classes(entrance.phase()), "opacity-0 translate-y-8");
        entrance.on_mount();
        assert_eq!(entrance_classes(entrance.phase()), "opacity-100 translate-y-0");
    }
}
