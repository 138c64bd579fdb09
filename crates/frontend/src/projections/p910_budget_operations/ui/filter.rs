use super::super::filter_form::{DateBound, FilterField};
use super::super::labels;
use super::view_model::OperationsVm;
use crate::shared::components::date_input::DateTimeInput;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::multi_select::MultiSelect;
use crate::shared::date_utils::to_date_input_value;
use crate::shared::icons::icon;
use contracts::enums::{ArtifactType, BudgetType, OperationType, PromotionType};
use contracts::projections::p910_budget_operations::dto::OperationsFilter;
use leptos::prelude::*;
use thaw::*;

fn code_options<E: Copy>(
    all: Vec<E>,
    code: fn(&E) -> &'static str,
    name: fn(&E) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|e| (code(e).to_string(), name(e).to_string()))
        .collect()
}

/// Текстовое поле с кнопкой очистки
#[component]
fn ClearableInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    on_input: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="clearable-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <span class="clearable-input__clear" on:click=move |_| on_clear.run(())>
                    {icon("x")}
                </span>
            </Show>
        </div>
    }
}

/// Выбор одного значения; пустой вариант означает "не задано"
#[component]
fn CodeSelect(
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="code-select"
            prop:value=value
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(code, name)| {
                        let key = code.clone();
                        view! {
                            <option value=code selected=move || value.get() == key>
                                {name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// Основная строка фильтра и панель "Другие фильтры"
#[component]
pub fn OperationsFilterBar(vm: OperationsVm) -> impl IntoView {
    let form = vm.form;
    let dirs = vm.directories;
    let searching = vm.is_search_pending();

    let text = move |get: fn(&OperationsFilter) -> Option<String>| {
        Signal::derive(move || form.with(|f| get(f.values()).unwrap_or_default()))
    };
    let ids = move |get: fn(&OperationsFilter) -> Option<Vec<String>>| {
        Signal::derive(move || form.with(|f| get(f.values()).unwrap_or_default()))
    };
    let options = |dir: RwSignal<crate::shared::directory::Directory>| {
        Signal::derive(move || dir.with(|d| d.as_options()))
    };

    view! {
        <div class="operations-filter">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <MultiSelect
                    options=options(dirs.campaigns)
                    selected=ids(|f| f.basic.campaign_id.clone())
                    on_change=Callback::new(move |v| vm.change_ids(FilterField::CampaignId, v))
                    title=labels::CAMPAIGN_NAME
                />
                <MultiSelect
                    options=options(dirs.activities)
                    selected=ids(|f| f.basic.activity_id.clone())
                    on_change=Callback::new(move |v| vm.change_ids(FilterField::ActivityId, v))
                    title=labels::ACTIVITY_NAME
                />
                <ClearableInput
                    value=text(|f| f.basic.budget_id.clone())
                    placeholder=labels::BUDGET_ID
                    on_input=Callback::new(move |v| vm.change_field(FilterField::BudgetId, v))
                    on_clear=Callback::new(move |_| vm.clear_field(FilterField::BudgetId))
                />

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.reset_form()
                >
                    "Сбросить"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    disabled=searching
                    on_click=move |_| vm.submit()
                >
                    {icon("search")}
                    {move || if searching.get() { "Поиск…" } else { "Найти" }}
                </Button>
            </Flex>

            <FilterPanel
                title=labels::OTHER_FILTERS
                is_expanded=vm.extended_open
                active_filters_count=vm.extended_diff_count()
                on_clear=Callback::new(move |_| vm.reset_extended())
            >
                <div class="operations-filter__extended">
                    <ClearableInput
                        value=text(|f| f.extended.author.clone())
                        placeholder=labels::AUTHOR
                        on_input=Callback::new(move |v| vm.change_field(FilterField::Author, v))
                        on_clear=Callback::new(move |_| vm.clear_field(FilterField::Author))
                    />
                    <ClearableInput
                        value=text(|f| f.extended.order_number.clone())
                        placeholder=labels::ORDER_NUMBER
                        on_input=Callback::new(move |v| vm.change_field(FilterField::OrderNumber, v))
                        on_clear=Callback::new(move |_| vm.clear_field(FilterField::OrderNumber))
                    />
                    <ClearableInput
                        value=text(|f| f.extended.artifact_name.clone())
                        placeholder=labels::ARTIFACT_NAME
                        on_input=Callback::new(move |v| vm.change_field(FilterField::ArtifactName, v))
                        on_clear=Callback::new(move |_| vm.clear_field(FilterField::ArtifactName))
                    />
                    <CodeSelect
                        options=code_options(ArtifactType::all(), ArtifactType::code, ArtifactType::display_name)
                        value=text(|f| f.extended.artifact_type.map(|t| t.code().to_string()))
                        placeholder=labels::ARTIFACT_TYPE
                        on_change=Callback::new(move |v| vm.change_field(FilterField::ArtifactType, v))
                    />
                    <CodeSelect
                        options=code_options(PromotionType::all(), PromotionType::code, PromotionType::display_name)
                        value=text(|f| f.extended.promotion_type.map(|t| t.code().to_string()))
                        placeholder=labels::PROMOTION_TYPE
                        on_change=Callback::new(move |v| vm.change_field(FilterField::PromotionType, v))
                    />
                    <CodeSelect
                        options=options(dirs.marketing)
                        value=text(|f| f.extended.marketing_id.clone())
                        placeholder=labels::MARKETING_NAME
                        on_change=Callback::new(move |v| vm.change_field(FilterField::MarketingId, v))
                    />
                    <CodeSelect
                        options=code_options(BudgetType::all(), BudgetType::code, BudgetType::display_name)
                        value=text(|f| f.extended.budget_type.map(|t| t.code().to_string()))
                        placeholder=labels::BUDGET_TYPE
                        on_change=Callback::new(move |v| vm.change_field(FilterField::BudgetType, v))
                    />
                    <CodeSelect
                        options=code_options(OperationType::all(), OperationType::code, OperationType::display_name)
                        value=text(|f| f.extended.operation_type.map(|t| t.code().to_string()))
                        placeholder=labels::OPERATION_TYPE
                        on_change=Callback::new(move |v| vm.change_field(FilterField::OperationType, v))
                    />
                    <MultiSelect
                        options=options(dirs.stores)
                        selected=ids(|f| f.extended.store_ids.clone())
                        on_change=Callback::new(move |v| vm.change_ids(FilterField::StoreIds, v))
                        title=labels::STORES
                    />
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <DateTimeInput
                            value=Signal::derive(move || form.with(|f| to_date_input_value(f.values().extended.create_at_from)))
                            on_change=Callback::new(move |v| vm.change_date(DateBound::From, v))
                            placeholder=labels::DATE_FROM
                        />
                        <DateTimeInput
                            value=Signal::derive(move || form.with(|f| to_date_input_value(f.values().extended.create_at_to)))
                            min=Signal::derive(move || form.with(|f| to_date_input_value(f.values().extended.create_at_from)))
                            on_change=Callback::new(move |v| vm.change_date(DateBound::To, v))
                            placeholder=labels::DATE_TO
                        />
                    </Flex>
                    // Полный сброс формы, как кнопка в основной строке
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.reset_form()
                    >
                        "Сбросить все"
                    </Button>
                </div>
            </FilterPanel>
        </div>
    }
}
