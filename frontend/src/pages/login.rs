use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::login_page as t, router::Route};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <main class={classes!("min-h-[80vh]", "flex", "items-center")}>
            <div class={classes!(
                "flex", "flex-col", "gap-3", "m-auto", "items-start", "p-8",
                "min-w-[340px]", "sm:min-w-96", "border", "rounded-xl",
                "text-zinc-600", "text-sm", "shadow-lg"
            )}>
                <p class={classes!("text-2xl", "font-semibold")}>{ t::TITLE }</p>
                <p>{ t::SUBTITLE }</p>
                <Link<Route> to={Route::Home} classes={classes!("text-primary", "underline")}>
                    { t::BACK_HOME }
                </Link<Route>>
            </div>
        </main>
    }
}
