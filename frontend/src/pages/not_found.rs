use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::not_found_page as t,
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("py-20", "text-center", "text-gray-700")}>
            <h2 class={classes!("text-2xl", "font-semibold")}>{ t::TITLE }</h2>
            <p class="mt-2">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!(
                "inline-flex", "items-center", "gap-2", "mt-6", "text-primary"
            )}>
                <Icon name={IconName::Home} size={18} />
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
