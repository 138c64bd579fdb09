//! Справочники (центры затрат, магазины, кампании, активности, маркетинг)
//!
//! Справочник только читается страницей. Пока он загружается, поиск по id
//! возвращает `None`, и ячейки таблицы просто остаются пустыми.

use super::error::FetchError;
use super::list_transaction::FetchStatus;
use contracts::projections::p910_budget_operations::dto::DirectoryItem;
use std::collections::HashMap;
use std::sync::Arc;

pub type DirectoryMap = Arc<HashMap<String, DirectoryItem>>;

#[derive(Debug, Clone, Default)]
pub struct Directory {
    items: Vec<DirectoryItem>,
    map: DirectoryMap,
    /// Растёт при каждой успешной загрузке; ключ кэша колонок
    version: u64,
    status: FetchStatus,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_map(&self) -> DirectoryMap {
        Arc::clone(&self.map)
    }

    /// (value, label) для выпадающих списков
    pub fn as_options(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|item| (item.id.clone(), item.name.clone()))
            .collect()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Pending;
    }

    pub fn complete(&mut self, result: Result<Vec<DirectoryItem>, FetchError>) {
        match result {
            Ok(items) => {
                self.map = Arc::new(
                    items
                        .iter()
                        .map(|item| (item.id.clone(), item.clone()))
                        .collect(),
                );
                self.items = items;
                self.version += 1;
                self.status = FetchStatus::Fulfilled;
            }
            Err(e) => {
                log::warn!("directory fetch failed: {}", e);
                self.status = FetchStatus::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> DirectoryItem {
        DirectoryItem {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_lookup_tolerates_missing_keys() {
        let dir = Directory::new();
        assert_eq!(dir.as_map().get("cc-1"), None);
        assert_eq!(dir.version(), 0);
    }

    #[test]
    fn test_complete_builds_map_and_bumps_version() {
        let mut dir = Directory::new();
        dir.begin_fetch();
        assert!(dir.status().is_pending());

        dir.complete(Ok(vec![item("cc-1", "Москва"), item("cc-2", "Казань")]));
        assert_eq!(dir.as_map()["cc-2"].name, "Казань");
        assert_eq!(dir.version(), 1);
        assert_eq!(dir.as_options()[0], ("cc-1".to_string(), "Москва".to_string()));

        dir.complete(Err(FetchError::Status(502)));
        assert!(dir.status().is_failed());
        assert_eq!(dir.version(), 1);
        assert_eq!(dir.as_map()["cc-1"].name, "Москва");
    }
}
