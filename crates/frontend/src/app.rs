use crate::projections::p910_budget_operations::ui::directories::Directories;
use crate::projections::p910_budget_operations::ui::BudgetOperationsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Справочники общие для страницы и её фильтров
    provide_context(Directories::new());

    view! {
        <BudgetOperationsPage />
    }
}
