//! Синхронизация состояния страницы с GET-параметрами URL
//!
//! Состояние читается из `location.search` при монтировании и записывается
//! обратно через `history.replaceState`, чтобы правки фильтров не засоряли
//! историю браузера. Каждое состояние пишет только свои ключи, остальные
//! параметры строки запроса сохраняются.

use chrono::{NaiveDate, NaiveDateTime};
use contracts::enums::{
    ArtifactType, BudgetType, OperationObject, OperationType, OrderAction, PromotionType,
};
use web_sys::window;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Упорядоченный набор параметров строки запроса (ключи могут повторяться)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Разбор `?a=1&b=x%20y&ids=1&ids=2`
    pub fn parse(search: &str) -> Self {
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode(key), decode(value))
            })
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Заменяет все значения ключа, сохраняя его позицию в строке
    pub fn set(&mut self, key: &str, values: Vec<String>) {
        let position = self
            .pairs
            .iter()
            .position(|(k, _)| k == key)
            .unwrap_or(self.pairs.len());
        self.pairs.retain(|(k, _)| k != key);
        let position = position.min(self.pairs.len());
        for (offset, value) in values.into_iter().enumerate() {
            self.pairs
                .insert(position + offset, (key.to_string(), value));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Строка без ведущего `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}

/// Значение, представимое в строке запроса
pub trait QueryValue: Sized {
    /// `None`, если значение отсутствует или не разбирается
    fn from_query(values: &[&str]) -> Option<Self>;
    fn to_query(&self) -> Vec<String>;
}

impl QueryValue for String {
    fn from_query(values: &[&str]) -> Option<Self> {
        values
            .first()
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }

    fn to_query(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl QueryValue for Vec<String> {
    fn from_query(values: &[&str]) -> Option<Self> {
        let ids: Vec<String> = values
            .iter()
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect();
        if ids.is_empty() {
            None
        } else {
            Some(ids)
        }
    }

    fn to_query(&self) -> Vec<String> {
        self.clone()
    }
}

impl QueryValue for NaiveDateTime {
    fn from_query(values: &[&str]) -> Option<Self> {
        let raw = values.first()?;
        NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    fn to_query(&self) -> Vec<String> {
        vec![self.format(DATETIME_FORMAT).to_string()]
    }
}

macro_rules! impl_query_value_by_code {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn from_query(values: &[&str]) -> Option<Self> {
                    values.first().and_then(|v| <$ty>::from_code(v))
                }

                fn to_query(&self) -> Vec<String> {
                    vec![self.code().to_string()]
                }
            }
        )*
    };
}

impl_query_value_by_code!(
    OperationObject,
    OperationType,
    PromotionType,
    ArtifactType,
    BudgetType,
    OrderAction,
);

/// Поле: отсутствующее или невалидное значение заменяется значением по умолчанию
pub fn read_field<T: QueryValue + Clone>(
    params: &QueryParams,
    key: &str,
    default: &Option<T>,
) -> Option<T> {
    let values = params.get_all(key);
    if values.is_empty() {
        return default.clone();
    }
    T::from_query(&values).or_else(|| default.clone())
}

/// `None` удаляет ключ из строки запроса
pub fn write_field<T: QueryValue>(params: &mut QueryParams, key: &str, value: &Option<T>) {
    match value {
        Some(v) => params.set(key, v.to_query()),
        None => params.remove(key),
    }
}

/// Состояние, отражаемое в строке запроса
pub trait QueryState: Sized {
    fn read_query(params: &QueryParams, defaults: &Self) -> Self;
    fn write_query(&self, params: &mut QueryParams);
}

/// Текущие параметры из адресной строки
pub fn current_query() -> QueryParams {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    QueryParams::parse(&search)
}

/// Начальное значение состояния из адресной строки
pub fn read_from_location<S: QueryState>(defaults: &S) -> S {
    S::read_query(&current_query(), defaults)
}

/// Записывает состояние в адресную строку без новой записи в истории
pub fn write_to_location<S: QueryState>(state: &S) {
    let mut params = current_query();
    state.write_query(&mut params);
    replace_query(&params);
}

fn replace_query(params: &QueryParams) {
    let Some(w) = window() else { return };

    let query = params.to_query_string();
    let new_search = if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    };

    // Only update URL if it actually changed
    let current_search = w.location().search().unwrap_or_default();
    if current_search == new_search {
        return;
    }

    let path = w.location().pathname().unwrap_or_default();
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, new_search)),
        );
    }
}
