use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сворачиваемая панель дополнительных фильтров
///
/// В заголовке: название, бейдж с числом изменённых полей и кнопка сброса
/// (видна только при ненулевом бейдже).
#[component]
pub fn FilterPanel(
    #[prop(into)] title: String,

    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_clear: Callback<()>,

    /// Filter content (form fields)
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">{title}</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                                <span
                                    class="filter-panel__clear"
                                    title="Сбросить"
                                    on:click=move |e| {
                                        e.stop_propagation();
                                        on_clear.run(());
                                    }
                                >
                                    {icon("x")}
                                </span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
