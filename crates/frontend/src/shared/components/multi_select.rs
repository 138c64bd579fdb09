use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Нативный `<select multiple>` со списком (value, label)
#[component]
pub fn MultiSelect(
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let handle_change = move |ev: leptos::ev::Event| {
        let select: HtmlSelectElement = event_target(&ev);
        let collection = select.selected_options();
        let values = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .map(|opt| opt.value())
            .collect();
        on_change.run(values);
    };

    view! {
        <select
            multiple
            class="multi-select"
            title=title
            disabled=move || disabled.get()
            on:change=handle_change
        >
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(value, label)| {
                        let key = value.clone();
                        view! {
                            <option
                                value=value
                                selected=move || selected.get().contains(&key)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
