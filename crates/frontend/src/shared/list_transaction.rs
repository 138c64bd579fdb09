//! Транзакция загрузки списка: фильтр, параметры, пагинация и статусы
//!
//! Состояние не зависит от Leptos: методы возвращают `ListRequest`, который
//! view-model отправляет на сервер, а ответ возвращается через `complete`.
//! Каждый запрос получает монотонный id; применяется только ответ на последний
//! выданный запрос, более старые ответы отбрасываются.

use super::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Failed,
}

impl FetchStatus {
    pub fn is_pending(&self) -> bool {
        *self == FetchStatus::Pending
    }

    pub fn is_fulfilled(&self) -> bool {
        *self == FetchStatus::Fulfilled
    }

    pub fn is_failed(&self) -> bool {
        *self == FetchStatus::Failed
    }
}

/// Пагинация (страницы с нуля)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        (self.total_count + self.page_size - 1) / self.page_size
    }

    /// Возврат на первую страницу; размер страницы сохраняется
    pub fn reset(&mut self) {
        self.page = 0;
        self.total_count = 0;
    }
}

/// Запрос, который нужно выполнить
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest<F, P> {
    pub id: u64,
    pub filter: F,
    pub params: P,
    pub page: usize,
    pub page_size: usize,
    pub is_search: bool,
}

/// Ответ сервера: одна страница и общее количество
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

#[derive(Debug, Clone)]
pub struct ListTransaction<F, P, T> {
    filter: F,
    params: P,
    items: Vec<T>,
    pagination: Pagination,
    default_page_size: usize,
    fetch_status: FetchStatus,
    search_status: FetchStatus,
    error: Option<FetchError>,
    last_request_id: u64,
    latest_request_id: Option<u64>,
    search_in_flight: bool,
}

impl<F, P, T> ListTransaction<F, P, T>
where
    F: Clone + Default,
    P: Clone + Default,
    T: Clone,
{
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: F::default(),
            params: P::default(),
            items: Vec::new(),
            pagination: Pagination::new(page_size),
            default_page_size: page_size,
            fetch_status: FetchStatus::Idle,
            search_status: FetchStatus::Idle,
            error: None,
            last_request_id: 0,
            latest_request_id: None,
            search_in_flight: false,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch_status
    }

    /// Статус именно поиска (submit фильтра), а не любой загрузки страницы
    pub fn search_status(&self) -> FetchStatus {
        self.search_status
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Меняет фильтр без запроса
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    /// Меняет дополнительные параметры без запроса
    pub fn set_params(&mut self, params: P) {
        self.params = params;
    }

    pub fn drop_pagination(&mut self) {
        self.pagination.reset();
    }

    /// Запрос с текущими параметрами
    pub fn run(&mut self) -> ListRequest<F, P> {
        self.issue(false)
    }

    /// Новый фильтр, первая страница, запрос
    pub fn search(&mut self, filter: F) -> ListRequest<F, P> {
        self.filter = filter;
        self.pagination.reset();
        self.issue(true)
    }

    pub fn set_page(&mut self, page: usize) -> ListRequest<F, P> {
        self.pagination.page = page;
        self.issue(false)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> ListRequest<F, P> {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page = 0;
        self.issue(false)
    }

    fn issue(&mut self, is_search: bool) -> ListRequest<F, P> {
        self.last_request_id += 1;
        let id = self.last_request_id;
        self.latest_request_id = Some(id);
        self.fetch_status = FetchStatus::Pending;
        if is_search {
            self.search_in_flight = true;
            self.search_status = FetchStatus::Pending;
        }

        ListRequest {
            id,
            filter: self.filter.clone(),
            params: self.params.clone(),
            page: self.pagination.page,
            page_size: self.pagination.page_size,
            is_search,
        }
    }

    /// Применяет ответ. `false`, если ответ устарел и был отброшен.
    pub fn complete(&mut self, id: u64, result: Result<ListPage<T>, FetchError>) -> bool {
        if self.latest_request_id != Some(id) {
            log::debug!(
                "dropping stale response #{} (latest: {:?})",
                id,
                self.latest_request_id
            );
            return false;
        }
        self.latest_request_id = None;

        let status = match result {
            Ok(page) => {
                self.items = page.items;
                self.pagination.total_count = page.total_count;
                self.error = None;
                FetchStatus::Fulfilled
            }
            Err(e) => {
                log::warn!("request #{} failed: {}", id, e);
                self.error = Some(e);
                FetchStatus::Failed
            }
        };

        self.fetch_status = status;
        if self.search_in_flight {
            self.search_in_flight = false;
            self.search_status = status;
        }
        true
    }

    /// Полный сброс: элементы, фильтр, параметры, пагинация.
    /// Ответы на уже отправленные запросы после сброса игнорируются.
    pub fn drop_state(&mut self) {
        let last_request_id = self.last_request_id;
        *self = Self::new(self.default_page_size);
        self.last_request_id = last_request_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Trn = ListTransaction<String, u8, u32>;

    fn page(items: Vec<u32>, total_count: usize) -> ListPage<u32> {
        ListPage { items, total_count }
    }

    #[test]
    fn test_run_and_complete() {
        let mut trn = Trn::new(50);
        trn.set_filter("f".to_string());
        trn.set_params(7);

        let req = trn.run();
        assert_eq!(req.filter, "f");
        assert_eq!(req.params, 7);
        assert_eq!((req.page, req.page_size), (0, 50));
        assert!(trn.fetch_status().is_pending());
        assert_eq!(trn.search_status(), FetchStatus::Idle);

        assert!(trn.complete(req.id, Ok(page(vec![1, 2], 120))));
        assert_eq!(trn.items(), &[1, 2]);
        assert_eq!(trn.pagination().total_pages(), 3);
        assert!(trn.fetch_status().is_fulfilled());
    }

    #[test]
    fn test_search_resets_page_and_tracks_search_status() {
        let mut trn = Trn::new(10);
        let first = trn.set_page(4);
        trn.complete(first.id, Ok(page(vec![], 100)));

        let req = trn.search("new".to_string());
        assert_eq!(req.page, 0);
        assert!(req.is_search);
        assert!(trn.search_status().is_pending());

        trn.complete(req.id, Err(FetchError::Status(500)));
        assert!(trn.search_status().is_failed());
        assert!(trn.fetch_status().is_failed());
        assert_eq!(trn.error(), Some(&FetchError::Status(500)));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut trn = Trn::new(10);
        let old = trn.run();
        let new = trn.set_page(1);

        assert!(trn.complete(new.id, Ok(page(vec![2], 20))));
        assert!(!trn.complete(old.id, Ok(page(vec![1], 20))));
        assert_eq!(trn.items(), &[2]);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut trn = Trn::new(10);
        let req = trn.run();
        trn.complete(req.id, Ok(page(vec![1, 2, 3], 3)));

        let req = trn.run();
        trn.complete(req.id, Err(FetchError::Network("offline".into())));
        assert_eq!(trn.items(), &[1, 2, 3]);
        assert!(trn.fetch_status().is_failed());
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut trn = Trn::new(10);
        trn.set_page(3);
        let req = trn.set_page_size(100);
        assert_eq!((req.page, req.page_size), (0, 100));
    }

    #[test]
    fn test_drop_state_invalidates_in_flight() {
        let mut trn = Trn::new(10);
        trn.set_filter("f".to_string());
        let req = trn.run();
        trn.drop_state();

        assert_eq!(trn.filter(), "");
        assert_eq!(trn.fetch_status(), FetchStatus::Idle);
        assert!(!trn.complete(req.id, Ok(page(vec![1], 1))));
        assert!(trn.items().is_empty());

        let next = trn.run();
        assert!(next.id > req.id);
    }
}
