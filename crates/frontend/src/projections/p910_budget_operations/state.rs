//! Координатор страницы операций
//!
//! Держит две транзакции (список и сводку по объектам), активную вкладку и
//! состояние первичной загрузки. Переходы возвращают `PageRequest`; view-model
//! выполняет их и возвращает ответы через `complete_list` / `complete_summary`.

use super::config::OperationsPageConfig;
use super::query::TabQuery;
use super::tabs::{build_tabs, is_selectable, TabEntry};
use crate::shared::error::FetchError;
use crate::shared::list_transaction::{ListPage, ListRequest, ListTransaction, Pagination};
use contracts::enums::OperationObject;
use contracts::projections::p910_budget_operations::dto::{
    Operation, OperationSummaryItem, OperationsFilter,
};

pub type ListCommand = ListRequest<OperationsFilter, OperationObject>;
pub type SummaryCommand = ListRequest<OperationsFilter, ()>;

/// Что нужно загрузить
#[derive(Debug, Clone, PartialEq)]
pub enum PageRequest {
    List(ListCommand),
    Summary(SummaryCommand),
}

/// Пока не пришла первая сводка, страница показывает заставку
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    InitialLoading,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct OperationsPageState {
    config: OperationsPageConfig,
    list: ListTransaction<OperationsFilter, OperationObject, Operation>,
    summary: ListTransaction<OperationsFilter, (), OperationSummaryItem>,
    load_state: PageLoadState,
}

impl OperationsPageState {
    pub fn new(
        config: OperationsPageConfig,
        initial_filter: OperationsFilter,
        initial_tab: OperationObject,
    ) -> Self {
        let mut list = ListTransaction::new(config.page_size);
        list.set_filter(initial_filter.clone());
        list.set_params(initial_tab);

        let mut summary = ListTransaction::new(config.page_size);
        summary.set_filter(initial_filter);

        Self {
            config,
            list,
            summary,
            load_state: PageLoadState::InitialLoading,
        }
    }

    pub fn config(&self) -> &OperationsPageConfig {
        &self.config
    }

    pub fn load_state(&self) -> PageLoadState {
        self.load_state
    }

    pub fn active_object(&self) -> OperationObject {
        *self.list.params()
    }

    /// Фильтр, по которому построен текущий список
    pub fn filter(&self) -> &OperationsFilter {
        self.list.filter()
    }

    pub fn items(&self) -> &[Operation] {
        self.list.items()
    }

    pub fn pagination(&self) -> Pagination {
        self.list.pagination()
    }

    pub fn list(&self) -> &ListTransaction<OperationsFilter, OperationObject, Operation> {
        &self.list
    }

    pub fn summary(&self) -> &ListTransaction<OperationsFilter, (), OperationSummaryItem> {
        &self.summary
    }

    pub fn tabs(&self) -> Vec<TabEntry> {
        build_tabs(self.summary.items())
    }

    /// Кнопка "Найти" крутится, пока идёт поиск по списку
    pub fn is_search_pending(&self) -> bool {
        self.list.search_status().is_pending()
    }

    /// Спиннер над вкладками после "Найти"
    pub fn is_summary_pending(&self) -> bool {
        self.summary.search_status().is_pending()
    }

    /// Первичная загрузка: сводка и первая страница списка
    pub fn init(&mut self) -> Vec<PageRequest> {
        vec![
            PageRequest::Summary(self.summary.run()),
            PageRequest::List(self.list.run()),
        ]
    }

    /// Новый фильтр: поиск по списку и пересчёт сводки
    pub fn submit(&mut self, filter: OperationsFilter) -> Vec<PageRequest> {
        vec![
            PageRequest::List(self.list.search(filter.clone())),
            PageRequest::Summary(self.summary.search(filter)),
        ]
    }

    /// Переключение объекта: первая страница с новым объектом
    pub fn change_object(&mut self, object: OperationObject) -> Option<PageRequest> {
        if object == self.active_object() {
            return None;
        }
        self.list.drop_pagination();
        self.list.set_params(object);
        Some(PageRequest::List(self.list.run()))
    }

    /// Клик по вкладке; заблокированные вкладки игнорируются
    pub fn select_tab(&mut self, object: OperationObject) -> Option<PageRequest> {
        if !is_selectable(&self.tabs(), object) {
            log::debug!("tab {} is disabled", object.code());
            return None;
        }
        self.change_object(object)
    }

    pub fn change_page(&mut self, page: usize) -> PageRequest {
        PageRequest::List(self.list.set_page(page))
    }

    pub fn change_page_size(&mut self, page_size: usize) -> PageRequest {
        PageRequest::List(self.list.set_page_size(page_size))
    }

    pub fn complete_list(&mut self, id: u64, result: Result<ListPage<Operation>, FetchError>) -> bool {
        self.list.complete(id, result)
    }

    /// Первая завершённая сводка (успешно или нет) снимает заставку
    pub fn complete_summary(
        &mut self,
        id: u64,
        result: Result<Vec<OperationSummaryItem>, FetchError>,
    ) -> bool {
        let result = result.map(|items| ListPage {
            total_count: items.len(),
            items,
        });
        let applied = self.summary.complete(id, result);
        if applied {
            self.load_state = PageLoadState::Loaded;
        }
        applied
    }

    /// Уход со страницы: сброс обеих транзакций, ответы в полёте игнорируются
    pub fn teardown(&mut self) {
        self.list.drop_state();
        self.summary.drop_state();
    }

    /// Что отражается в адресной строке
    pub fn query_snapshot(&self) -> (OperationsFilter, TabQuery) {
        (
            self.list.filter().clone(),
            TabQuery {
                tab_key: self.active_object(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p910_budget_operations::columns::ColumnsCache;
    use crate::projections::p910_budget_operations::filter_form::{FilterField, FilterForm};
    use crate::shared::directory::Directory;
    use crate::shared::query_params::{QueryParams, QueryState};

    fn summary_item(object: OperationObject, count: u64) -> OperationSummaryItem {
        OperationSummaryItem { object, count }
    }

    fn from_query(search: &str) -> OperationsPageState {
        let config = OperationsPageConfig::default();
        let params = QueryParams::parse(search);
        let filter = OperationsFilter::read_query(&params, &config.default_filter());
        let tab = TabQuery::read_query(
            &params,
            &TabQuery {
                tab_key: config.default_tab,
            },
        );
        OperationsPageState::new(config, filter, tab.tab_key)
    }

    fn split(requests: Vec<PageRequest>) -> (Option<ListCommand>, Option<SummaryCommand>) {
        let mut list = None;
        let mut summary = None;
        for r in requests {
            match r {
                PageRequest::List(c) => list = Some(c),
                PageRequest::Summary(c) => summary = Some(c),
            }
        }
        (list, summary)
    }

    #[test]
    fn test_initial_load_from_empty_query() {
        let mut state = from_query("");
        assert_eq!(state.active_object(), OperationObject::Campaign);
        assert_eq!(state.filter(), &OperationsFilter::default());
        assert_eq!(state.load_state(), PageLoadState::InitialLoading);

        let (list, summary) = split(state.init());
        let summary = summary.unwrap();
        assert_eq!(summary.filter, OperationsFilter::default());
        assert_eq!(list.unwrap().params, OperationObject::Campaign);

        assert!(state.complete_summary(
            summary.id,
            Ok(vec![summary_item(OperationObject::Campaign, 3)])
        ));
        assert_eq!(state.load_state(), PageLoadState::Loaded);
        assert_eq!(state.tabs()[0].count, 3);
    }

    #[test]
    fn test_submit_budget_id() {
        let mut state = from_query("?tabKey=ACTIVITY");
        state.init();

        let mut form = FilterForm::new(
            state.config().default_filter(),
            state.filter().clone(),
        );
        form.handle_change(FilterField::BudgetId, "B-100".to_string());

        let (list, summary) = split(state.submit(form.submit()));
        let list = list.unwrap();
        let summary = summary.unwrap();
        assert_eq!(list.filter.basic.budget_id.as_deref(), Some("B-100"));
        assert_eq!(summary.filter.basic.budget_id.as_deref(), Some("B-100"));
        assert!(list.is_search);
        assert_eq!(list.params, OperationObject::Activity);
        assert!(state.is_search_pending());

        let (filter, tab) = state.query_snapshot();
        let mut params = QueryParams::parse("?tabKey=ACTIVITY");
        filter.write_query(&mut params);
        tab.write_query(&mut params);
        let qs = params.to_query_string();
        assert!(qs.contains("budgetId=B-100"));
        assert!(qs.contains("tabKey=ACTIVITY"));
    }

    #[test]
    fn test_switch_campaign_to_promotion() {
        let mut state = from_query("?budgetId=B-1");
        let (list, summary) = split(state.init());
        state.complete_summary(
            summary.unwrap().id,
            Ok(vec![
                summary_item(OperationObject::Campaign, 500),
                summary_item(OperationObject::Promotion, 7),
            ]),
        );
        state.complete_list(
            list.unwrap().id,
            Ok(ListPage {
                items: vec![],
                total_count: 500,
            }),
        );

        let PageRequest::List(page3) = state.change_page(2) else {
            panic!("expected list request");
        };
        assert_eq!(page3.page, 2);

        let Some(PageRequest::List(req)) = state.select_tab(OperationObject::Promotion) else {
            panic!("expected list request");
        };
        assert_eq!(req.page, 0);
        assert_eq!(req.params, OperationObject::Promotion);
        assert_eq!(req.filter.basic.budget_id.as_deref(), Some("B-1"));
        assert_eq!(state.active_object(), OperationObject::Promotion);

        let mut cache = ColumnsCache::new();
        let keys = cache
            .get(state.active_object(), &Directory::new(), &Directory::new())
            .keys();
        assert!(keys.contains(&"orderNumber"));
        assert!(keys.contains(&"orderAction"));
        assert!(keys.contains(&"promotionType"));
        assert!(!keys.contains(&"marketingName"));

        // тот же объект повторно не запрашивается
        assert_eq!(state.select_tab(OperationObject::Promotion), None);
    }

    #[test]
    fn test_disabled_tab_is_ignored() {
        let mut state = from_query("");
        let (_, summary) = split(state.init());
        state.complete_summary(
            summary.unwrap().id,
            Ok(vec![summary_item(OperationObject::Campaign, 1)]),
        );
        assert_eq!(state.select_tab(OperationObject::Marketing), None);
        assert_eq!(state.active_object(), OperationObject::Campaign);
    }

    #[test]
    fn test_failed_first_summary_still_loads_page() {
        let mut state = from_query("");
        let (_, summary) = split(state.init());

        assert!(state.complete_summary(summary.unwrap().id, Err(FetchError::Status(500))));
        assert_eq!(state.load_state(), PageLoadState::Loaded);

        let tabs = state.tabs();
        assert_eq!(tabs.len(), 5);
        assert!(tabs.iter().all(|t| t.count == 0 && t.disabled));
    }

    #[test]
    fn test_later_summary_failure_keeps_page_loaded() {
        let mut state = from_query("");
        let (_, summary) = split(state.init());
        state.complete_summary(
            summary.unwrap().id,
            Ok(vec![summary_item(OperationObject::Promotion, 4)]),
        );
        assert_eq!(state.load_state(), PageLoadState::Loaded);

        let mut filter = OperationsFilter::default();
        filter.basic.budget_id = Some("B-100".to_string());
        let (_, summary) = split(state.submit(filter));
        assert!(state.is_summary_pending());

        assert!(state.complete_summary(summary.unwrap().id, Err(FetchError::Status(503))));
        assert_eq!(state.load_state(), PageLoadState::Loaded);
        assert!(!state.is_summary_pending());

        let tabs = state.tabs();
        assert_eq!(tabs[2].object, OperationObject::Promotion);
        assert_eq!(tabs[2].count, 4);
        assert!(!tabs[2].disabled);
    }

    #[test]
    fn test_stale_list_response_is_dropped() {
        let mut state = from_query("");
        let (first, _) = split(state.init());
        let PageRequest::List(second) = state.change_page(1) else {
            panic!("expected list request");
        };

        let stale = Operation {
            id: "old".to_string(),
            ..serde_json::from_value(serde_json::json!({
                "id": "x",
                "operationType": "DEBIT",
                "createdAt": "2024-01-01T00:00:00Z"
            }))
            .unwrap()
        };
        assert!(!state.complete_list(
            first.unwrap().id,
            Ok(ListPage {
                items: vec![stale],
                total_count: 1,
            })
        ));
        assert!(state.items().is_empty());

        assert!(state.complete_list(
            second.id,
            Ok(ListPage {
                items: vec![],
                total_count: 0,
            })
        ));
        assert!(state.list().fetch_status().is_fulfilled());
    }

    #[test]
    fn test_teardown_ignores_in_flight_responses() {
        let mut state = from_query("?budgetId=B-1");
        let (list, summary) = split(state.init());
        state.teardown();

        assert!(!state.complete_list(
            list.unwrap().id,
            Ok(ListPage {
                items: vec![],
                total_count: 9,
            })
        ));
        assert!(!state.complete_summary(summary.unwrap().id, Ok(vec![])));
        assert_eq!(state.filter(), &OperationsFilter::default());
    }
}
