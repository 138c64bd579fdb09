use super::super::columns::{AmountTag, CellValue, ColumnDef};
use super::super::labels;
use super::view_model::OperationsVm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::money::format_money_rub;
use contracts::projections::p910_budget_operations::dto::Operation;
use leptos::prelude::*;
use thaw::*;

/// Сумма по центру затрат; отрицательные суммы красные
#[component]
fn AmountBadge(tag: AmountTag) -> impl IntoView {
    let color = if tag.amount < 0.0 {
        BadgeColor::Danger
    } else {
        BadgeColor::Informative
    };
    let label = match tag.cost_center {
        Some(name) => format!("{}:  {}", name, format_money_rub(tag.amount)),
        None => format_money_rub(tag.amount),
    };

    view! {
        <Badge appearance=BadgeAppearance::Tint color=color attr:style="margin: 2px 4px 0 0;">
            {label}
        </Badge>
    }
}

fn render_cell(value: CellValue) -> AnyView {
    match value {
        CellValue::Empty => view! { <></> }.into_any(),
        CellValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellValue::Link { href, text } => view! { <a href=href class="table__link">{text}</a> }.into_any(),
        CellValue::Amounts(tags) => view! {
            <div class="amount-tags">
                {tags.into_iter().map(|tag| view! { <AmountBadge tag=tag /> }).collect_view()}
            </div>
        }
        .into_any(),
        CellValue::Artifact { icon: name, title, name: artifact } => view! {
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <span class="artifact-icon" title=title>{icon(name)}</span>
                <span>{artifact}</span>
            </Flex>
        }
        .into_any(),
    }
}

fn render_row(columns: &[ColumnDef], op: &Operation) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|col| {
            let value = col.cell(op);
            view! {
                <TableCell>
                    <TableCellLayout truncate=true>{render_cell(value)}</TableCellLayout>
                </TableCell>
            }
        })
        .collect_view();
    view! { <TableRow>{cells}</TableRow> }
}

/// Таблица операций активного объекта с пагинацией
#[component]
pub fn OperationList(vm: OperationsVm) -> impl IntoView {
    let columns = vm.columns();
    let items = vm.items();
    let pagination = vm.pagination();
    let pending = vm.is_list_pending();
    let page_size_options = vm.page_size_options();

    view! {
        <div class="operations-list">
            <div class="operations-list__toolbar">
                <PaginationControls
                    pagination=pagination
                    on_page_change=Callback::new(move |page| vm.change_page(page))
                    on_page_size_change=Callback::new(move |size| vm.change_page_size(size))
                    page_size_options=page_size_options
                    disabled=pending
                />
                <Show when=move || pending.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {move || {
                                columns
                                    .get()
                                    .0
                                    .iter()
                                    .map(|col| {
                                        let title = col.title;
                                        let min_width = col.width.unwrap_or(120.0);
                                        view! {
                                            <TableHeaderCell resizable=true min_width=min_width>
                                                {title}
                                            </TableHeaderCell>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let set = columns.get();
                            items.with(|items| {
                                items
                                    .iter()
                                    .map(|op| render_row(&set.0, op))
                                    .collect_view()
                            })
                        }}
                    </TableBody>
                </Table>

                <Show when=move || items.with(|items| items.is_empty()) && !pending.get()>
                    <div class="table-empty">
                        {icon("inbox")}
                        <span>{labels::EMPTY_OPERATIONS}</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
