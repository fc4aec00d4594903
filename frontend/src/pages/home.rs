use yew::prelude::*;

use crate::{
    components::{
        page_header::PageHeader, promotional_banner::PromotionalBanner,
        speciality_menu::SpecialityMenu,
    },
    data::speciality_catalog,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_memo((), |_| speciality_catalog());

    html! {
        <div>
            <PageHeader />
            <SpecialityMenu catalog={(*catalog).clone()} />
            <PromotionalBanner />
        </div>
    }
}
