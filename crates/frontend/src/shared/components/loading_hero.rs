use leptos::prelude::*;
use thaw::*;

/// Заставка на время первичной загрузки страницы
#[component]
pub fn LoadingHero(#[prop(into)] title: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading-hero">
            <h1 class="page__title">{title}</h1>
            <Flex vertical=true align=FlexAlign::Center gap=FlexGap::Medium>
                <Spinner />
                <span class="loading-hero__label">{label}</span>
            </Flex>
        </div>
    }
}
