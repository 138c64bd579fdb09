use super::view_model::OperationsVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Вкладки объектов со счётчиками из сводки
#[component]
pub fn OperationsTabs(vm: OperationsVm) -> impl IntoView {
    let tabs = vm.tabs();
    let active = vm.active_object();
    let loading = vm.is_summary_pending();
    let tab_icon = |name: &str| view! { <span class="tab-icon">{icon(name)}</span> };

    view! {
        <div class="operations-tabs">
            <Flex
                gap=FlexGap::Small
                align=FlexAlign::Center
                style="padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
            >
                <For
                    each=move || tabs.get()
                    key=|tab| (tab.object, tab.count)
                    let:tab
                >
                    {
                        let object = tab.object;
                        let is_active = move || active.get() == object;
                        view! {
                            <Button
                                appearance=Signal::derive(move || {
                                    if is_active() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                size=ButtonSize::Small
                                disabled=tab.disabled
                                on_click=move |_| vm.select_tab(object)
                            >
                                {tab_icon(tab.icon)}
                                {tab.label}
                                <Badge
                                    appearance=BadgeAppearance::Tint
                                    color=Signal::derive(move || {
                                        if is_active() {
                                            BadgeColor::Brand
                                        } else {
                                            BadgeColor::Informative
                                        }
                                    })
                                    attr:style="margin-left: 6px;"
                                >
                                    {tab.count.to_string()}
                                </Badge>
                            </Button>
                        }
                    }
                </For>
            </Flex>
            <Show when=move || loading.get()>
                <div class="operations-tabs__overlay">
                    <Spinner size=SpinnerSize::Small />
                </div>
            </Show>
        </div>
    }
}
