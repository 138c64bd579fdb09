use super::super::config::OperationsPageConfig;
use super::super::labels;
use super::directories::use_directories;
use super::filter::OperationsFilterBar;
use super::list::OperationList;
use super::tabs::OperationsTabs;
use super::view_model::OperationsVm;
use crate::shared::components::loading_hero::LoadingHero;
use leptos::prelude::*;

/// Страница операций с бюджетом
#[component]
pub fn BudgetOperationsPage(#[prop(optional)] config: Option<OperationsPageConfig>) -> impl IntoView {
    let vm = OperationsVm::new(config.unwrap_or_default(), use_directories());

    vm.init();
    vm.sync_query();
    on_cleanup(move || vm.teardown());

    let is_loaded = vm.is_loaded();

    view! {
        <Show
            when=move || is_loaded.get()
            fallback=|| view! {
                <LoadingHero title=labels::PAGE_TITLE label=labels::LOADING_OPERATIONS />
            }
        >
            <div class="page operations-page">
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">{labels::PAGE_TITLE}</h1>
                    </div>
                </div>
                <div class="page__content">
                    <OperationsFilterBar vm=vm />
                    <OperationsTabs vm=vm />
                    <OperationList vm=vm />
                </div>
            </div>
        </Show>
    }
}
