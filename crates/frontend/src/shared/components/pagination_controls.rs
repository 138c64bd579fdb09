use crate::shared::icons::icon;
use crate::shared::list_transaction::Pagination;
use leptos::prelude::*;

/// Пагинация списка (страницы с нуля)
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,

    /// Блокирует кнопки, пока страница грузится
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let current_page = move || pagination.get().page;
    let total_pages = move || pagination.get().total_pages();
    let is_first = move || disabled.get() || current_page() == 0;
    let is_last = move || disabled.get() || current_page() + 1 >= total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} / {} ({})", p.page + 1, p.total_pages().max(1), p.total_count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page();
                    if page + 1 < total_pages() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || pagination.get().page_size.to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || pagination.get().page_size == size
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
