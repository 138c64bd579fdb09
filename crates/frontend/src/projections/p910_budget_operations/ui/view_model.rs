//! ViewModel страницы операций
//!
//! Всё состояние живёт в `OperationsPageState` и `FilterForm`; VM выполняет
//! запросы, которые они возвращают, и складывает ответы обратно.

use super::super::api::{fetch_operations, fetch_summary, DirectoryKind};
use super::super::columns::{ColumnSet, ColumnsCache};
use super::super::config::OperationsPageConfig;
use super::super::filter_form::{DateBound, FilterField, FilterForm};
use super::super::query::TabQuery;
use super::super::state::{OperationsPageState, PageLoadState, PageRequest};
use super::super::tabs::TabEntry;
use super::directories::Directories;
use crate::shared::list_transaction::Pagination;
use crate::shared::query_params::{read_from_location, write_to_location};
use contracts::enums::OperationObject;
use contracts::projections::p910_budget_operations::dto::Operation;
use leptos::logging::{error, log};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct OperationsVm {
    pub state: RwSignal<OperationsPageState>,
    pub form: RwSignal<FilterForm>,
    pub extended_open: RwSignal<bool>,
    pub directories: Directories,
    columns_cache: StoredValue<ColumnsCache>,
}

impl OperationsVm {
    /// Начальный фильтр и вкладка берутся из адресной строки
    pub fn new(config: OperationsPageConfig, directories: Directories) -> Self {
        let defaults = config.default_filter();
        let initial = read_from_location(&defaults);
        let tab = read_from_location(&TabQuery {
            tab_key: config.default_tab,
        });

        Self {
            state: RwSignal::new(OperationsPageState::new(
                config,
                initial.clone(),
                tab.tab_key,
            )),
            form: RwSignal::new(FilterForm::new(defaults, initial)),
            extended_open: RwSignal::new(false),
            directories,
            columns_cache: StoredValue::new(ColumnsCache::new()),
        }
    }

    fn execute(&self, request: PageRequest) {
        let state = self.state;
        match request {
            PageRequest::List(cmd) => spawn_local(async move {
                let result = fetch_operations(&cmd).await;
                if let Err(e) = &result {
                    error!("Failed to load operations: {}", e);
                }
                state.try_update(|s| s.complete_list(cmd.id, result));
            }),
            PageRequest::Summary(cmd) => spawn_local(async move {
                let result = fetch_summary(&cmd).await;
                if let Err(e) = &result {
                    error!("Failed to load operations summary: {}", e);
                }
                state.try_update(|s| s.complete_summary(cmd.id, result));
            }),
        }
    }

    fn execute_all(&self, requests: Vec<PageRequest>) {
        for request in requests {
            self.execute(request);
        }
    }

    /// Вход на страницу: справочники, сводка, первая страница списка
    pub fn init(&self) {
        let filter = self.state.with_untracked(|s| s.filter().clone());
        self.directories.load(DirectoryKind::CostCenters, None);
        self.directories.load(DirectoryKind::Stores, None);
        self.directories.load(DirectoryKind::Marketing, None);
        self.directories
            .load(DirectoryKind::Campaigns, filter.basic.campaign_id.clone());
        self.directories
            .load(DirectoryKind::Activities, filter.basic.activity_id.clone());

        let requests = self.state.try_update(|s| s.init()).unwrap_or_default();
        self.execute_all(requests);
    }

    pub fn teardown(&self) {
        self.state.try_update(|s| s.teardown());
    }

    /// Адресная строка повторяет применённый фильтр и вкладку
    pub fn sync_query(&self) {
        let state = self.state;
        Effect::new(move |_| {
            let (filter, tab) = state.with(|s| s.query_snapshot());
            write_to_location(&filter);
            write_to_location(&tab);
        });
    }

    pub fn submit(&self) {
        let filter = self.form.with_untracked(|f| f.submit());
        log!("Search operations: {:?}", filter);
        let requests = self
            .state
            .try_update(|s| s.submit(filter))
            .unwrap_or_default();
        self.execute_all(requests);
    }

    pub fn select_tab(&self, object: OperationObject) {
        if let Some(Some(request)) = self.state.try_update(|s| s.select_tab(object)) {
            self.execute(request);
        }
    }

    pub fn change_page(&self, page: usize) {
        if let Some(request) = self.state.try_update(|s| s.change_page(page)) {
            self.execute(request);
        }
    }

    pub fn change_page_size(&self, page_size: usize) {
        if let Some(request) = self.state.try_update(|s| s.change_page_size(page_size)) {
            self.execute(request);
        }
    }

    pub fn change_field(&self, field: FilterField, raw: String) {
        self.form.update(|f| f.handle_change(field, raw));
    }

    pub fn change_ids(&self, field: FilterField, ids: Vec<String>) {
        self.form.update(|f| f.handle_change_ids(field, ids));
    }

    pub fn change_date(&self, bound: DateBound, raw: String) {
        self.form.update(|f| f.handle_change_date(bound, &raw));
    }

    pub fn clear_field(&self, field: FilterField) {
        self.form.update(|f| f.handle_clear_value(field));
    }

    pub fn reset_form(&self) {
        self.form.update(|f| f.reset());
    }

    pub fn reset_extended(&self) {
        self.form.update(|f| f.reset_extended());
    }

    pub fn is_loaded(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.load_state() == PageLoadState::Loaded))
    }

    pub fn active_object(&self) -> Memo<OperationObject> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.active_object()))
    }

    pub fn tabs(&self) -> Memo<Vec<TabEntry>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.tabs()))
    }

    pub fn items(&self) -> Signal<Vec<Operation>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items().to_vec()))
    }

    pub fn pagination(&self) -> Signal<Pagination> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination()))
    }

    pub fn page_size_options(&self) -> Vec<usize> {
        self.state
            .with_untracked(|s| s.config().page_size_options.clone())
    }

    pub fn is_list_pending(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.list().fetch_status().is_pending()))
    }

    pub fn is_search_pending(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_search_pending()))
    }

    pub fn is_summary_pending(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_summary_pending()))
    }

    pub fn extended_diff_count(&self) -> Signal<usize> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.extended_diff_count()))
    }

    /// Колонки пересобираются только при смене объекта или версии справочника
    pub fn columns(&self) -> Memo<ColumnSet> {
        let active = self.active_object();
        let cost_centers = self.directories.cost_centers;
        let stores = self.directories.stores;
        let cache = self.columns_cache;
        Memo::new(move |_| {
            let object = active.get();
            cost_centers.with(|cc| {
                stores.with(|st| {
                    cache
                        .try_update_value(|c| c.get(object, cc, st))
                        .unwrap_or_else(|| ColumnsCache::new().get(object, cc, st))
                })
            })
        })
    }
}
