use leptos::prelude::*;

/// Поле даты и времени с нативным выбором (`datetime-local`)
/// Browser automatically displays dates in locale format (dd.mm.yyyy for RU locale)
#[component]
pub fn DateTimeInput(
    /// Значение в формате yyyy-mm-ddThh:mm, пустая строка если не задано
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the value changes (receives yyyy-mm-ddThh:mm or "")
    on_change: Callback<String>,
    /// Нижняя граница выбора
    #[prop(optional, into)]
    min: Signal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            type="datetime-local"
            class="date-input"
            prop:value=value
            min=move || {
                let min = min.get();
                if min.is_empty() { None } else { Some(min) }
            }
            placeholder=placeholder
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
            style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;"
        />
    }
}
