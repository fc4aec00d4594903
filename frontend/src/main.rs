//! Landing pages of the Medibook doctor-appointment site.

mod components;
mod config;
mod data;
mod hooks;
mod i18n;
mod navigation_context;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}
